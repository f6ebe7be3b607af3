//! Demo record bound by `tagbind bind`.

use tagbind::Record;

/// Connection settings for the demo service's database.
#[derive(Debug, Default, Record)]
pub struct DatabaseConfig {
    #[tag(r#"env:"URL" arg:"url" json:"url" help:"Connection URL""#)]
    pub url: String,

    #[tag(r#"env:"POOL_SIZE" arg:"pool-size" json:"pool_size" default:"4""#)]
    pub pool_size: u32,

    #[tag(r#"env:"TLS" arg:"tls" json:"tls""#)]
    pub tls: bool,
}

/// A small service configuration exercising defaults, rules and nesting.
#[derive(Debug, Default, Record)]
pub struct ServiceConfig {
    #[tag(r#"env:"TAGBIND_NAME" arg:"name" json:"name" rules:"required""#)]
    pub name: String,

    #[tag(r#"env:"TAGBIND_HOST" arg:"host" json:"host" default:"127.0.0.1""#)]
    pub host: String,

    #[tag(r#"env:"TAGBIND_PORT" arg:"port" short:"p" json:"port" default:"8080" rules:"required""#)]
    pub port: u16,

    #[tag(r#"env:"TAGBIND_LOG_LEVEL" arg:"log-level" json:"log_level" default:"info""#)]
    pub log_level: String,

    #[tag(r#"env:"TAGBIND_DB" arg:"db" json:"database""#)]
    pub database: DatabaseConfig,

    #[tag(r#"arg:"tags" json:"tags""#)]
    pub tags: Vec<String>,
}
