use clap::Parser;

use contacts::{
    configuration as cfg,
    Config,
    logger,
    server,
    service,
    ContactStorage,
    MemStorage,
    SqliteStorage,
    StorageKind,
    DEFAULT_HTTP_PORT,
};

#[derive(Parser, Debug)]
#[command(name = "Launcher")]
#[command(version = "1.0")]
#[command(about = "Contacts service launcher", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Address used for listening
    #[arg(short, long, value_name = "ADDRESS")]
    addr: Option<String>,

    /// The port used for listening
    #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,

    /// The SQLite database file backing the directory
    #[arg(short, long, value_name = "PATH")]
    database: Option<String>,

    /// Keep contacts in process memory instead of SQLite
    #[arg(short, long)]
    memory: bool,

    /// Origin allowed for cross-origin requests
    #[arg(short, long, value_name = "ORIGIN")]
    origin: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let mut b = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        b.load(path)
            .map_err(|e| panic!("{e}"))
            .unwrap();
    }

    if let Some(addr) = opts.addr.as_ref() {
        b.with_addr(addr);
    }
    if let Some(path) = opts.database.as_ref() {
        b.with_database(path);
    }
    if let Some(origin) = opts.origin.as_ref() {
        b.with_allowed_origin(origin);
    }
    if opts.memory {
        b.with_storage_kind(StorageKind::Memory);
    }
    b.with_port(opts.port);

    let cfg = b.build().unwrap();
    logger::setup(cfg.log_level());

    #[cfg(feature = "inspect")]
    cfg.dump();

    let mut storage: Box<dyn ContactStorage> = match cfg.storage_kind() {
        StorageKind::Sqlite => Box::new(SqliteStorage::new()),
        StorageKind::Memory => Box::new(MemStorage::new()),
    };
    storage.open(cfg.storage_path())
        .map_err(|e| panic!("{e}"))
        .unwrap();

    let storage = service::shared(storage);
    server::run(cfg.as_ref(), storage)
        .await
        .map_err(|e| panic!("{e}"))
        .unwrap();
}
