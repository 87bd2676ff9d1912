mod args;

use clap::Parser;
use std::process::ExitCode;

use args::{Args, Command};
use rtfc_cost_calculator::app::{self, AppError};
use rtfc_cost_calculator::i18n::{self, keys, Translator};
use rtfc_cost_calculator::{config, ui_cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    let mut cfg = match config::load_or_default_at(&args.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::error!("config load failed: {err}");
            eprintln!("{}: {err}", Translator::new("en").t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match try_run(args, &mut cfg, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args, cfg: &mut config::Config, tr: &mut Translator) -> Result<(), AppError> {
    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => app::run(cfg, &args.config, tr),
        Command::Calc(calc) => app::run_once(cfg, &calc.into(), tr),
        Command::Catalog => {
            ui_cli::handle_catalog(tr);
            Ok(())
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
