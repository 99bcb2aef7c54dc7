//! pixscroll - Entry Point

use clap::Parser;
use pixscroll::config::CliOverrides;
use pixscroll::model::AppError;
use pixscroll::search::{HttpTransport, SearchClient, ThreadedExecutor};
use pixscroll::view::GallerySnapshot;
use std::path::{Path, PathBuf};
use tracing::info;

/// pixscroll - infinite-scroll image search in the terminal
#[derive(Parser, Debug)]
#[command(name = "pixscroll")]
#[command(version)]
#[command(about = "Search an image API and scroll through the results in your terminal")]
pub struct Args {
    /// Search term to submit on start
    pub query: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API key (overrides config file and PIXSCROLL_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API base URL (overrides config file and PIXSCROLL_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write the gallery as an HTML page to this path on exit
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            initial_query: self.query.clone(),
            // Only override if flag was explicitly set
            no_color: self.no_color.then_some(true),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pixscroll::config::load_config_with_precedence(args.config.clone())?;
        let merged = pixscroll::config::merge_config(config_file);
        let with_env = pixscroll::config::apply_env_overrides(merged);
        pixscroll::config::apply_cli_overrides(with_env, args.overrides())
    };

    pixscroll::logging::init(&config.log_file_path)?;

    info!(
        base_url = %config.base_url,
        initial_query = ?config.initial_query,
        log_file = ?config.log_file_path,
        "Configuration loaded and resolved"
    );

    // Fail before touching the terminal if there is no key
    let api = config.api_config()?;

    let client = SearchClient::new(api, HttpTransport::new()?);
    let executor = ThreadedExecutor::spawn(client).map_err(AppError::Worker)?;

    let snapshot = pixscroll::view::run_with_executor(
        executor,
        pixscroll::view::CliArgs {
            initial_query: config.initial_query.clone(),
            no_color: config.no_color,
        },
    )?;

    if let Some(path) = args.export.as_deref() {
        export_gallery(path, &export_document(&snapshot))?;
        info!(path = ?path, images = snapshot.gallery.items().len(), "Exported gallery");
    }

    Ok(())
}

/// HTML page for the gallery, titled with the term it was loaded for.
fn export_document(snapshot: &GallerySnapshot) -> String {
    let title = snapshot.term.as_deref().unwrap_or("pixscroll");
    snapshot.gallery.to_html_document(title)
}

fn export_gallery(path: &Path, document: &str) -> Result<(), AppError> {
    std::fs::write(path, document).map_err(|source| AppError::Export {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["pixscroll", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["pixscroll", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["pixscroll"]);
        assert_eq!(args.query, None);
        assert_eq!(args.config, None);
        assert_eq!(args.api_key, None);
        assert_eq!(args.base_url, None);
        assert_eq!(args.export, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_positional_query() {
        let args = Args::parse_from(["pixscroll", "yellow flowers"]);
        assert_eq!(args.query, Some("yellow flowers".to_string()));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "pixscroll",
            "cats",
            "--config",
            "/custom/config.toml",
            "--api-key",
            "abc123",
            "--base-url",
            "http://localhost:8080/api",
            "--export",
            "out.html",
            "--no-color",
        ]);
        assert_eq!(args.query, Some("cats".to_string()));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(args.api_key, Some("abc123".to_string()));
        assert_eq!(args.base_url, Some("http://localhost:8080/api".to_string()));
        assert_eq!(args.export, Some(PathBuf::from("out.html")));
        assert!(args.no_color);
    }

    #[test]
    fn test_overrides_leave_unset_flags_as_none() {
        let overrides = Args::parse_from(["pixscroll"]).overrides();
        assert_eq!(overrides, CliOverrides::default());
    }

    #[test]
    fn test_overrides_carry_query_and_no_color() {
        let overrides = Args::parse_from(["pixscroll", "dogs", "--no-color"]).overrides();
        assert_eq!(overrides.initial_query, Some("dogs".to_string()));
        assert_eq!(overrides.no_color, Some(true));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Args::try_parse_from(["pixscroll", "--theme", "monokai"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_title_uses_term_shown_at_exit() {
        let snapshot = GallerySnapshot {
            gallery: pixscroll::gallery::Gallery::new(),
            term: Some("dogs".to_string()),
        };
        let document = export_document(&snapshot);
        assert!(document.contains("<title>dogs"), "got: {document}");
    }

    #[test]
    fn test_export_title_falls_back_without_search() {
        let document = export_document(&GallerySnapshot::default());
        assert!(document.contains("<title>pixscroll"), "got: {document}");
    }

    #[test]
    fn test_export_gallery_reports_path_on_failure() {
        let path = Path::new("/nonexistent-dir-for-pixscroll/out.html");
        let err = export_gallery(path, "<html></html>").unwrap_err();
        assert!(matches!(err, AppError::Export { .. }));
        assert!(err.to_string().contains("out.html"));
    }
}
