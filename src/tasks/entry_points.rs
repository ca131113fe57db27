//! `main` functions for the binaries.  (the binary crates are just shims that call these)

use crate::cmd;
use crate::ui::logging::GlobalLogger;
use crate::FailResult;

use ::clap::{App, Arg, ArgMatches};
use ::dmat_config::ValidatedSettings;
use ::std::ffi::OsStr;
use ::std::path::{Path, PathBuf};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        ::std::process::exit(1);
    });
}

/// Arguments shared by every binary.
struct CommonArgs {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    verbosity: i32,
}

impl CommonArgs {
    fn augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("config")
                .short("c").long("config")
                .takes_value(true).value_name("CONFIG")
                .help("settings yaml (tolerance, display). Defaults are used for anything not given."),
            Arg::with_name("log_file")
                .long("log")
                .takes_value(true).value_name("FILE")
                .help("also write the log to this file"),
            Arg::with_name("verbose")
                .short("v").long("verbose")
                .multiple(true)
                .help("log each pivoting step"),
            Arg::with_name("quiet")
                .short("q").long("quiet")
                .conflicts_with("verbose")
                .help("only log warnings and errors"),
        ])
    }

    fn resolve_args(m: &ArgMatches) -> CommonArgs {
        let verbosity = match m.is_present("quiet") {
            true => -1,
            false => m.occurrences_of("verbose") as i32,
        };
        CommonArgs {
            config: m.value_of_os("config").map(PathBuf::from),
            log_file: m.value_of_os("log_file").map(PathBuf::from),
            verbosity,
        }
    }

    /// Install the logger, then read the settings.
    fn start(&self) -> FailResult<ValidatedSettings> {
        let mut logger = GlobalLogger::default();
        logger.verbosity(self.verbosity);
        if let Some(path) = &self.log_file {
            logger.path(path);
        }
        logger.apply()?;

        ValidatedSettings::load(self.config.as_ref().map(|p| p.as_path()))
    }
}

fn input_arg(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name).required(true).value_name("INPUT").help(help)
}

fn path_of<'m>(m: &'m ArgMatches, name: &str) -> &'m Path {
    // (clap enforces presence of required args before we get here)
    m.value_of_os(name).map(Path::new).unwrap_or_else(|| Path::new(""))
}

// -------------------------------------------------------------------------------------

pub fn dmat_reduce() {
    wrap_result_main(|| {
        let app = {
            App::new("dmat-reduce")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Row-reduce a matrix by Gaussian elimination with partial pivoting, \
                        removing the rows that become zero.")
                .arg(input_arg("input", "yaml file containing the matrix"))
        };
        let matches = CommonArgs::augment_clap_app(app).get_matches();
        let settings = CommonArgs::resolve_args(&matches).start()?;

        let stdout = ::std::io::stdout();
        cmd::run_reduce(&settings, path_of(&matches, "input"), &mut stdout.lock())
    });
}

pub fn dmat_det() {
    wrap_result_main(|| {
        let app = {
            App::new("dmat-det")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Compute the determinant of a square matrix.")
                .arg(input_arg("input", "yaml file containing the matrix"))
        };
        let matches = CommonArgs::augment_clap_app(app).get_matches();
        let settings = CommonArgs::resolve_args(&matches).start()?;

        let stdout = ::std::io::stdout();
        cmd::run_det(&settings, path_of(&matches, "input"), &mut stdout.lock())
    });
}

pub fn dmat_mul() {
    wrap_result_main(|| {
        let app = {
            App::new("dmat-mul")
                .version(env!("CARGO_PKG_VERSION"))
                .about("Multiply two matrices.")
                .arg(input_arg("left", "yaml file containing the left factor"))
                .arg(input_arg("right", "yaml file containing the right factor"))
        };
        let matches = CommonArgs::augment_clap_app(app).get_matches();
        let settings = CommonArgs::resolve_args(&matches).start()?;

        let stdout = ::std::io::stdout();
        let (left, right) = (path_of(&matches, "left"), path_of(&matches, "right"));
        cmd::run_mul(&settings, left, right, &mut stdout.lock())
    });
}
