use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("clearread")
        .version(env!("CARGO_PKG_VERSION"))
        .author("ClearRead Contributors")
        .about("Extract readable documents from web pages")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (markdown, json, text, speech, html)")
                .value_name("FORMAT")
                .default_value("markdown")
                .value_parser(["markdown", "json", "text", "speech", "html"]),
        )
        .arg(clap::arg!(--frontmatter "Include TOML frontmatter (Markdown) or reading metrics (JSON)"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--"min-block-chars" <NUM> "Shortest text, in characters, kept as a block").default_value("10"))
        .arg(
            clap::arg!(--"min-div-chars" <NUM> "A div must be longer than this to count as a paragraph")
                .default_value("50"),
        )
        .arg(
            clap::arg!(--"min-structured-blocks" <NUM> "Fewer structural blocks than this switches to sentence splitting")
                .default_value("3"),
        )
        .arg(
            clap::arg!(--"min-sentence-chars" <NUM> "A split sentence must be longer than this to be kept")
                .default_value("20"),
        )
        .arg(clap::arg!(--pretty "Pretty print JSON output"))
        .arg(clap::arg!(--width <COLS> "Wrap plain text output at this width (0 = no wrapping)").default_value("0"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "clearread", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "clearread", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "clearread", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "clearread", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
