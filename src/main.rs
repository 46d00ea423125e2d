//! The `lectern` binary.

use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use lectern::{Capability, Markup, ModuleInfo, Options, Renderer};

/// Render tagged module markup to display HTML.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Files of module markup to render; standard input if none passed.
    files: Vec<PathBuf>,

    /// The markup dialect of the input.
    #[arg(long, value_enum, default_value = "gbf")]
    markup: Markup,

    /// Module name used in footnote addresses.
    #[arg(long, default_value = "stdin")]
    module: String,

    /// Key short-text used in footnote addresses.
    #[arg(long, default_value = "")]
    key: String,

    /// Skip the Strong's/morphology annotation merge pass.
    #[arg(long)]
    no_annotate: bool,
}

struct CliModule {
    name: String,
    markup: Markup,
}

impl ModuleInfo for CliModule {
    fn name(&self) -> &str {
        &self.name
    }

    // The CLI has no bookshelf metadata to consult; assume annotations can
    // occur and let the content decide.
    fn has(&self, _capability: Capability) -> bool {
        true
    }

    fn markup(&self) -> Markup {
        self.markup
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut text = String::new();
    if cli.files.is_empty() {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        for file in &cli.files {
            text.push_str(&std::fs::read_to_string(file)?);
        }
    }

    let options = Options::builder()
        .annotate(!cli.no_annotate)
        .markup(cli.markup)
        .build();

    let module = CliModule {
        name: cli.module,
        markup: cli.markup,
    };
    let html = Renderer::new(&options).render_entry(&text, Some(&module), Some(&cli.key));
    println!("{}", html);

    Ok(())
}
