use advocate_directory::app::interrupt::{ctrl_c, until_interrupted, Outcome, INTERRUPTED_EXIT_CODE};
use advocate_directory::app::{render_page, Session};
use advocate_directory::core::ConfigProvider;
use advocate_directory::utils::error::{DirectoryError, ErrorSeverity};
use advocate_directory::utils::{logger, validation::Validate};
use advocate_directory::{CancellationFlag, CliConfig, HttpAdvocateSource, PageController};
use anyhow::Context;
use clap::Parser;

fn exit_code(e: &DirectoryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail(e);
    }
    let config = cli.resolve().unwrap_or_else(|e| fail(e));
    let format = config.output_format();

    let source = HttpAdvocateSource::new(config.api_endpoint());
    let mut controller = PageController::new(config.page_size());
    let cancel = CancellationFlag::new();

    tracing::info!("🚀 Loading advocates from {}", source.endpoint());
    let applied = match until_interrupted(controller.load(&source, &cancel), ctrl_c()).await {
        Outcome::Completed(applied) => applied,
        Outcome::Interrupted => {
            cancel.cancel();
            false
        }
    };
    if !applied {
        tracing::warn!("Interrupted before advocates loaded");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }

    if let Some(e) = controller.error().cloned() {
        println!("{}", render_page(&controller, format)?);
        fail(DirectoryError::LoadError(e));
    }

    controller.set_query(cli.query.clone());
    for _ in 1..cli.pages {
        if !controller.load_more() {
            break;
        }
    }

    if cli.once {
        print!("{}", render_page(&controller, format)?);
        return Ok(());
    }

    // 互動模式讀 stdin 是阻塞的，移到 blocking 執行緒；Ctrl-C 仍由這裡處理
    let session = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let mut session = Session::new(controller, format, std::io::stdout());
        session.run(stdin.lock())
    });

    match until_interrupted(session, ctrl_c()).await {
        Outcome::Completed(joined) => {
            joined.context("session thread panicked")??;
            Ok(())
        }
        Outcome::Interrupted => {
            tracing::info!("Interrupted, leaving session");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}
