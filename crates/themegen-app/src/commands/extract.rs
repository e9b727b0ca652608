use std::time::Duration;

use themegen_common::ThemegenError;
use themegen_css::{categorize, extract_all, CategorizedVariables};

use super::Context;
use crate::fetch::fetch_stylesheet;

pub async fn run(ctx: &Context, url: Option<String>, verbose: bool) -> Result<(), ThemegenError> {
    let extractor = &ctx.config.extractor;
    let url = url.unwrap_or_else(|| extractor.url.clone());
    let css = fetch_stylesheet(&url, Duration::from_secs(extractor.timeout_secs)).await?;

    let variables = extract_all(&css, &extractor.prefix);
    let categorized = categorize(&variables);
    print!("{}", render_summary(&url, &categorized, verbose));
    Ok(())
}

fn render_summary(url: &str, categorized: &CategorizedVariables, verbose: bool) -> String {
    let mut out = format!("{url}: {} variables\n", categorized.total());
    for (category, vars) in categorized.iter() {
        out.push_str(&format!("  {category}: {}\n", vars.len()));
        if verbose {
            for (name, value) in vars.iter() {
                out.push_str(&format!("    {name}: {value};\n"));
            }
        }
    }
    out
}
