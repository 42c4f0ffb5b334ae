use anyhow::Result;
use tracing::info_span;

use crate::cli::ManifestArgs;
use crate::convert;
use crate::config::LeavecalConfig;

pub fn run(args: &ManifestArgs, config: &LeavecalConfig) -> Result<()> {
    let _span = info_span!("manifest").entered();
    let manifest = convert::build_cache_manifest(&config.cache);
    println!("cache: {}", manifest.version);
    for asset in &manifest.assets {
        println!("  {asset}");
    }
    let stale = manifest.stale_caches(&args.existing);
    if !stale.is_empty() {
        println!("stale: {}", stale.join(", "));
    }
    Ok(())
}
