use serde::Deserialize;

// Missing fields read as empty strings so validation reports them
// as domain errors rather than as JSON shape errors.

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub p1: String,
    #[serde(default)]
    pub p2: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayRoundRequest {
    #[serde(default)]
    pub p1_move: String,
    #[serde(default)]
    pub p2_move: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
}
