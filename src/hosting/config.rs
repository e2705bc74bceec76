use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080", help = "Address to listen on")]
    pub bind: String,
    #[arg(long, env = "WORKERS", default_value_t = 4, help = "HTTP worker threads")]
    pub workers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from(["hosting", "--bind", "0.0.0.0:9000", "--workers", "2"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.workers, 2);
    }
}
