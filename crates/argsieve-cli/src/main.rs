use argsieve_core::app::{AppBuilder, SieveConfig};
use argsieve_core::typed::Props;
use argsieve_core::{ArgBag, observability};
use clap::Parser;
use tracing::info;

mod args;
mod demo;

use args::Cli;
use demo::{Bar, BarProps, FOOBAR, Foo, FooProps};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // (A) 設定: ファイル → CLI フラグで上書き
    let mut config = match &cli.config {
        Some(path) => SieveConfig::load(path)?,
        None => SieveConfig::default(),
    };
    if let Some(times) = cli.times {
        config.times = times;
    }
    if let Some(policy) = cli.unknown_keys {
        config.unknown_keys = policy;
    }
    observability::init(&config.log_filter)?;

    // (B) key=value を bag に
    let mut bag = ArgBag::new();
    for raw in &cli.args {
        let (key, value) = ArgBag::parse_pair(raw)?;
        bag.insert(key, value);
    }

    // (C) foo と bar を登録
    let dispatcher = AppBuilder::from_config(&config)
        .call_site(FOOBAR)
        .register::<FooProps, _>(Foo)?
        .register::<BarProps, _>(Bar)?
        .expect_schemas(&[FooProps::NAME, BarProps::NAME])
        .build()?;

    // (D) times 回実行
    let report = dispatcher.run(config.times, &bag).await?;
    info!(rounds = report.rounds, calls = report.calls.len(), "done");
    Ok(())
}
