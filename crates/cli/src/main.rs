use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "supportagent")]
#[command(about = "SupportAgent demo chat", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Run the demo chat server (serves the widget page and its endpoints).
    Demo {
        /// Config file path (default: SUPPORTAGENT_CONFIG_PATH or ~/.supportagent/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,

        /// Demo server port (default from config or 8090)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Chat with the support agent from the terminal. Falls back to canned
    /// replies when the API is unreachable, same as the widget.
    Chat {
        /// Config file path (default: SUPPORTAGENT_CONFIG_PATH or ~/.supportagent/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("supportagent {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Demo { config, port }) => {
            if let Err(e) = run_demo(config, port).await {
                log::error!("demo failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Chat { config }) => {
            if let Err(e) = run_chat(config).await {
                log::error!("chat failed: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Run with --help for usage");
        }
    }
}

async fn run_demo(
    config_path: Option<std::path::PathBuf>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let (mut config, _) = lib::config::load_config(config_path)?;
    if let Some(p) = port {
        config.demo.port = p;
    }
    log::info!(
        "starting demo server on {}:{}",
        config.demo.bind,
        config.demo.port
    );
    lib::demo::run_demo(config).await
}

async fn run_chat(config_path: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::{self, Write};

    let (config, _) = lib::config::load_config(config_path)?;
    let base_url = lib::config::resolve_api_base_url(&config);
    let client = lib::agent::SupportApiClient::new(
        base_url,
        config.api.user_id,
        std::time::Duration::from_secs(config.api.timeout_secs),
    );
    let mut rng = StdRng::from_os_rng();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", lib::transcript::GREETING);

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("/exit") || input.eq_ignore_ascii_case("/quit") {
            break;
        }

        let reply = lib::resolver::resolve_reply(&client, input, &mut rng).await;
        if reply.source == lib::resolver::ReplySource::Canned {
            eprintln!("(support api unreachable — canned reply)");
        }
        println!("< {}", reply.text.trim());
    }

    Ok(())
}
