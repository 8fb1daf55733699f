//! Host-side helper: `cargo run [port]` builds the WASM bundle into
//! `static/pkg` and serves `static/` on a local HTTP port.

use std::process::{self, Command, Stdio};

use clap::Parser;

/// Build the sketch bundle and serve it locally.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Port for the local HTTP server
    #[arg(default_value_t = 8000)]
    port: u16,
}

fn main() {
    let Args { port } = Args::parse();

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may load a stale bundle.");
        }
    }

    println!("Serving static/ at http://127.0.0.1:{port} …");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .status();

    match status {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("http server exited with {st}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            process::exit(1);
        }
    }
}
