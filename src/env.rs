pub const LISTEN: &str = "LISTEN";
pub const PORT: &str = "PORT";

/// Listen address of the server. The default `[::]` is the unspecified IPv6 address, which on a
/// dual-stack host also accepts IPv4 clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env {
    pub listen: String,
    pub port: String,
}
impl Default for Env {
    fn default() -> Self {
        Self { listen: "[::]".to_string(), port: "5000".to_string() }
    }
}
impl Env {
    /// Each field is taken from its environment variable when set, from `default` otherwise.
    pub fn environment(default: Self) -> Self {
        Self {
            listen: std::env::var(LISTEN).unwrap_or(default.listen),
            port: std::env::var(PORT).unwrap_or(default.port),
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.listen, self.port)
    }
}
