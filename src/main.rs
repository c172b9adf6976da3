//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` over a local HTTP server.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use clap::Parser;
    use std::process::{Command, Stdio};

    #[derive(Parser, Debug)]
    #[command(version, about = "Build and serve the ninja star demo")]
    struct Args {
        /// Port for the local HTTP server
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Serve whatever is already in static/pkg without rebuilding
        #[arg(long)]
        skip_wasm: bool,
    }

    pub fn run() {
        let args = Args::parse();

        if !args.skip_wasm {
            println!("Building WASM pkg …");
            match Command::new("wasm-pack")
                .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
                .status()
            {
                Ok(st) if st.success() => {}
                Ok(_) => {
                    eprintln!("wasm build failed, see the wasm-pack output above");
                    std::process::exit(1);
                }
                Err(_) => {
                    eprintln!("wasm-pack is not installed; serving the existing static/pkg (pass --skip-wasm to silence this)");
                }
            }
        }

        println!("Launching local server at http://127.0.0.1:{} …", args.port);
        let status = Command::new("python3")
            .args(["-m", "http.server", &args.port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(st) if st.success() => {}
            Ok(st) => {
                eprintln!("http server exited with {st}");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("failed to start http server: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    host::run();
}
