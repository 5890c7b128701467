use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use report_dashboard::config::ReportConfig;
use report_dashboard::infra::export::csv::{default_report_file_name, export_report};
use report_dashboard::infra::sqlite::repo::SqliteRepo;
use report_dashboard::logging::init_tracing;
use report_dashboard::usecase::ports::repo::RecordRepository;
use report_dashboard::usecase::services::import_service::ImportService;
use report_dashboard::usecase::services::query_service::QueryService;
use report_dashboard::{
    FilterClause, Operator, RecordKind, Region, ReportRecord, ReportView, SortClause, Task, User,
};

/// Run `$body` with `$R` bound to the record type for `$kind`.
macro_rules! with_record_type {
    ($kind:expr, $R:ident => $body:expr) => {
        match $kind {
            RecordKind::Task => {
                type $R = Task;
                $body
            }
            RecordKind::User => {
                type $R = User;
                $body
            }
            RecordKind::Region => {
                type $R = Region;
                $body
            }
        }
    };
}

/// Task, user and region reports from the local record store
#[derive(Parser, Debug)]
#[command(name = "report-dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the record database (overrides the config file)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `report_dashboard=trace`
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the stored records of one kind with a CSV or spreadsheet
    Import {
        #[arg(short, long)]
        kind: RecordKind,

        file: PathBuf,

        /// Sheet to read from a spreadsheet (defaults to the first with data)
        #[arg(long)]
        sheet: Option<String>,
    },

    /// Print one page of a report
    Show {
        #[arg(short, long)]
        kind: RecordKind,

        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,

        /// Remember the resulting column selection for this kind
        #[arg(long)]
        save_columns: bool,
    },

    /// Write the whole filtered and sorted report to CSV
    Export {
        #[arg(short, long)]
        kind: RecordKind,

        #[command(flatten)]
        query: QueryArgs,

        /// Output file (defaults to `<kind>-report-<MMDD>.csv`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the columns of a kind, marking the active ones
    Columns {
        #[arg(short, long)]
        kind: RecordKind,
    },

    /// List imported record sources
    Sources,

    /// List filter operators
    Operators,
}

#[derive(Args, Debug, Default)]
struct QueryArgs {
    /// Filter clause `COLUMN OP VALUE`, repeatable (all must match)
    #[arg(long = "filter", value_parser = FilterClause::parse)]
    filters: Vec<FilterClause>,

    /// Sort clause `COLUMN[:asc|:desc]`, repeatable (first has priority)
    #[arg(long = "sort", value_parser = SortClause::parse)]
    sorts: Vec<SortClause>,

    /// Toggle a column on or off, repeatable
    #[arg(long = "toggle")]
    toggles: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ReportConfig::load(cli.config.as_deref())?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_filter));

    let db_path = match cli.db {
        Some(path) => path,
        None => config.resolved_db_path()?,
    };
    tracing::debug!(db = %db_path.display(), "using record store");
    let repo: Arc<dyn RecordRepository> = Arc::new(SqliteRepo::new(db_path));

    match cli.command {
        Commands::Import { kind, file, sheet } => {
            let imported = ImportService::new(repo).import_file(kind, &file, sheet.as_deref())?;
            println!("imported {} {} records", imported.row_count, imported.kind);
        }
        Commands::Show {
            kind,
            query,
            page,
            page_size,
            save_columns,
        } => {
            let queries = QueryService::new(repo);
            let page_size = page_size.unwrap_or(config.page_size);
            with_record_type!(kind, R => {
                let mut view = queries.open_report::<R>(page_size)?;
                apply_query(&mut view, &query)?;
                view.go_to_page(page);
                print_page(&view);
                if save_columns {
                    queries.save_columns(&view)?;
                }
            });
        }
        Commands::Export { kind, query, out } => {
            let queries = QueryService::new(repo);
            let out = out.unwrap_or_else(|| PathBuf::from(default_report_file_name(kind)));
            with_record_type!(kind, R => {
                let mut view = queries.open_report::<R>(config.page_size)?;
                apply_query(&mut view, &query)?;
                let written = export_report(&view, &out)?;
                println!("wrote {written} rows to {}", out.display());
            });
        }
        Commands::Columns { kind } => {
            let queries = QueryService::new(repo);
            with_record_type!(kind, R => {
                let view = queries.open_report::<R>(config.page_size)?;
                for column in view.all_columns() {
                    let marker = if view.columns().is_active(column) { "*" } else { " " };
                    println!("{marker} {column}");
                }
            });
        }
        Commands::Sources => {
            let sources = QueryService::new(repo)
                .list_sources()
                .context("failed to list record sources")?;
            if sources.is_empty() {
                println!("nothing imported yet");
            }
            for source in sources {
                println!(
                    "{:<8} {:>6} rows  {}  ({})",
                    source.kind, source.row_count, source.source_path, source.imported_at
                );
            }
        }
        Commands::Operators => {
            for operator in Operator::ALL {
                println!("{:<9} {}", operator.symbol(), operator.label());
            }
        }
    }

    Ok(())
}

fn apply_query<R: ReportRecord>(view: &mut ReportView<R>, query: &QueryArgs) -> Result<()> {
    for name in &query.toggles {
        view.toggle_column(name)?;
    }
    for clause in &query.filters {
        if !view.columns().contains(&clause.column) {
            tracing::warn!(column = %clause.column, "filter column is not a {} column", R::KIND);
        }
        view.push_filter(clause.clone());
    }
    for clause in &query.sorts {
        view.push_sort(clause.clone());
    }
    Ok(())
}

fn print_page<R: ReportRecord>(view: &ReportView<R>) {
    let columns = view.active_columns();
    let cells = view.page_cells();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            cells
                .iter()
                .map(|row| row[idx].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let render = |row: &[String]| {
        row.iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("{}", render(columns));
    println!(
        "{}",
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    for row in &cells {
        println!("{}", render(row));
    }

    let page = view.page();
    println!(
        "page {} of {} ({} of {} rows match)",
        page.page,
        page.page_count,
        page.total_rows,
        view.records().len()
    );
}
