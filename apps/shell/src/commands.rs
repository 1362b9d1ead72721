use crate::cli::Command;
use anyhow::{Context, Result, anyhow};
use netkit::Shell;
use netkit::domain::catalog::Category;
use netkit::domain::config::CatalogConfig;
use netkit::domain::route::{RouteKind, RouteRecord};
use netkit::kernel::catalog::Registry;
use netkit::kernel::routing::RouteTable;
use std::io::Write;
use tracing::debug;

/// Bootstraps the shell and runs `command` against it, writing the report to `out`.
///
/// # Errors
/// Fails when the catalog is invalid or `out` cannot be written.
pub(crate) fn run(command: Command, catalog: &CatalogConfig, out: &mut impl Write) -> Result<()> {
    let shell = netkit::init(catalog).context("Catalog is invalid")?;
    debug!(?command, "Running command");

    match command {
        Command::Catalog { category: None } => print_catalog(&shell.registry, out),
        Command::Catalog { category: Some(id) } => {
            let category = shell
                .registry
                .category(&id)
                .ok_or_else(|| anyhow!("No category with id '{id}'"))?;
            print_category(category, out)
        }
        Command::Routes { json: true } => {
            serde_json::to_writer_pretty(&mut *out, &shell.routes)?;
            writeln!(out)?;
            Ok(())
        }
        Command::Routes { json: false } => print_routes(&shell.routes, out),
        Command::Resolve { path } => print_resolution(&shell.routes, &path, out),
        Command::Check => print_check(&shell, out),
    }
}

fn print_catalog(registry: &Registry, out: &mut impl Write) -> Result<()> {
    if registry.categories().is_empty() {
        writeln!(out, "No categories registered.")?;
        return Ok(());
    }

    for category in registry.categories() {
        print_category(category, out)?;
    }
    Ok(())
}

fn print_category(category: &Category, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} ({})", category.name, category.id)?;
    if !category.description.is_empty() {
        writeln!(out, "  {}", category.description)?;
    }
    for feature in &category.features {
        writeln!(out, "  {:<20} {:<24} {}", feature.name, feature.path, feature.component.key())?;
    }
    Ok(())
}

fn print_routes(routes: &RouteTable, out: &mut impl Write) -> Result<()> {
    for record in routes.records() {
        print_record(record, 0, out)?;
    }
    Ok(())
}

fn print_record(record: &RouteRecord, depth: usize, out: &mut impl Write) -> Result<()> {
    let path = if record.path.is_empty() { "\"\"" } else { record.path.as_str() };
    writeln!(
        out,
        "{:indent$}{path:<24} {:<16} {:<8} {}",
        "",
        record.name().unwrap_or("-"),
        kind_label(record.kind),
        record.view_key(),
        indent = depth * 2,
    )?;
    for child in &record.children {
        print_record(child, depth + 1, out)?;
    }
    Ok(())
}

fn print_resolution(routes: &RouteTable, location: &str, out: &mut impl Write) -> Result<()> {
    let resolution = routes.resolve(location);
    let chain: Vec<_> = resolution.chain().map(RouteRecord::view_key).collect();

    writeln!(out, "path:     {}", resolution.path())?;
    writeln!(out, "route:    {}", resolution.name().unwrap_or("-"))?;
    writeln!(out, "view:     {}", resolution.view().key())?;
    writeln!(out, "chain:    {}", chain.join(" > "))?;
    writeln!(out, "fallback: {}", if resolution.is_fallback() { "yes" } else { "no" })?;
    Ok(())
}

fn print_check(shell: &Shell, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Catalog OK: {} categories, {} features, {} routes",
        shell.registry.categories().len(),
        shell.registry.len(),
        shell.routes.len()
    )?;
    Ok(())
}

const fn kind_label(kind: RouteKind) -> &'static str {
    match kind {
        RouteKind::Layout => "layout",
        RouteKind::Home => "home",
        RouteKind::Feature => "feature",
        RouteKind::Fallback => "fallback",
    }
}
