#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Kegg;

use Examples::kegg_examples::kegg_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    //
    let task: usize = 2;
    kegg_examples(task);
}
