use async_compat::Compat;
use tracing::{Level, event};

use crate::{
    api::MapScripApi, cli::ShowArgs, errors::ScripResult, map::CommandMap,
    scriptures::Scriptures,
};

pub fn run(args: ShowArgs, base_url: &str) -> ScripResult<()> {
    smol::block_on(Compat::new(show(args, base_url)))
}

async fn show(args: ShowArgs, base_url: &str) -> ScripResult<()> {
    let api = MapScripApi::new(base_url)?;
    let mut scriptures = Scriptures::init(api, CommandMap::default()).await?;
    scriptures.on_hash_changed(&args.fragment).await;

    let commands = serde_json::to_string(scriptures.map().commands())?;
    let document = scriptures.page().document(&commands);
    match args.out {
        Some(path) => {
            smol::fs::write(&path, document).await?;
            event!(Level::INFO, "page written to {}", path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}
