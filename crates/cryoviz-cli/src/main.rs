use cryoviz::cost::{format_currency, format_mass, format_price_per_kg};
use cryoviz::database::{CategoryFilter, MaterialFilter, summary_line};
use cryoviz::detail::percentage_label;
use cryoviz::render::raster::{self, RasterError, RasterOptions};
use cryoviz::render::{ChartKind, HeadlessError, HeadlessRenderer, SvgDiagram};
use cryoviz::{
    CostEstimate, DetailPanel, MaterialCatalog, MaterialResolver, SelectionState, ThemeMode,
    ViewId, ViewerConfig,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(cryoviz::Error),
    Headless(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
    NoMatch(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoMatch(name) => write!(f, "No material matches {name:?}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<cryoviz::Error> for CliError {
    fn from(value: cryoviz::Error) -> Self {
        Self::Core(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Cost,
    Materials,
    Chart,
    Chip,
    Scene,
    Detail,
    Resolve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    positional: Option<String>,
    chart: ChartKind,
    config: Option<String>,
    theme: Option<ThemeMode>,
    view: Option<ViewId>,
    diagram_id: Option<String>,
    select: Option<String>,
    material: Option<String>,
    category: Option<String>,
    search: Option<String>,
    json: bool,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "cryoviz-cli\n\
\n\
USAGE:\n\
  cryoviz-cli cost [--json] [--pretty]\n\
  cryoviz-cli materials [--category <name>] [--search <text>] [--json] [--pretty]\n\
  cryoviz-cli chart [top|category|pie] [RENDER OPTIONS]\n\
  cryoviz-cli chip [--select <component-id>] [RENDER OPTIONS]\n\
  cryoviz-cli scene [--select <component-id>] [--pretty]\n\
  cryoviz-cli detail [--view fridge|chip] [--select <component-id>] [--material <name>] [--pretty]\n\
  cryoviz-cli resolve [--view fridge|chip] <name>\n\
\n\
GLOBAL OPTIONS:\n\
  --config <path>      viewer config (JSON, or YAML for .yaml/.yml)\n\
  --theme light|dark   overrides the configured theme\n\
  --id <diagram-id>    overrides the configured SVG id prefix\n\
\n\
RENDER OPTIONS:\n\
  --format svg|png|jpg|pdf  --scale <n>  --background <css-color>  --out <path>\n\
\n\
NOTES:\n\
  - SVG is printed to stdout unless --out is given.\n\
  - PNG/JPG/PDF output defaults to ./<command>.<ext> (e.g. ./chip.png).\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) to see resolution decisions on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        render_scale: 1.0,
        ..Default::default()
    };

    let mut command_seen = false;
    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "cost" | "materials" | "chart" | "chip" | "scene" | "detail" | "resolve"
                if !command_seen =>
            {
                command_seen = true;
                args.command = match a.as_str() {
                    "cost" => Command::Cost,
                    "materials" => Command::Materials,
                    "chart" => Command::Chart,
                    "chip" => Command::Chip,
                    "scene" => Command::Scene,
                    "detail" => Command::Detail,
                    _ => Command::Resolve,
                };
            }
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--theme" => {
                let mode = next_value(&mut it)?;
                args.theme = Some(mode.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--view" => {
                let view = next_value(&mut it)?;
                args.view = Some(view.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--select" => args.select = Some(next_value(&mut it)?.clone()),
            "--material" => args.material = Some(next_value(&mut it)?.clone()),
            "--category" => args.category = Some(next_value(&mut it)?.clone()),
            "--search" => args.search = Some(next_value(&mut it)?.clone()),
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => {
                if args.positional.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.positional = Some(value.to_string());
            }
        }
    }

    let positional_ok = match args.command {
        Command::Chart => true,
        Command::Resolve => args.positional.is_some(),
        _ => args.positional.is_none(),
    };
    if !positional_ok {
        return Err(CliError::Usage(usage()));
    }
    if let (Command::Chart, Some(name)) = (&args.command, args.positional.as_deref()) {
        args.chart = ChartKind::from_str(name).map_err(|_| CliError::Usage(usage()))?;
    }
    Ok(args)
}

/// Config file (if any) with command line flags layered on top.
fn load_config(args: &Args) -> Result<ViewerConfig, CliError> {
    let base = match args.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            ViewerConfig::from_named_str(path, &text)?
        }
        None => ViewerConfig::default(),
    };

    let mut overrides = Map::new();
    if let Some(theme) = args.theme {
        overrides.insert("theme".to_string(), Value::from(theme.as_str()));
    }
    if let Some(id) = &args.diagram_id {
        overrides.insert("diagramId".to_string(), Value::from(id.as_str()));
    }
    if overrides.is_empty() {
        return Ok(base);
    }
    Ok(base.merged_with(&Value::Object(overrides))?)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn default_raster_out_path(stem: &str, format: RenderFormat) -> std::path::PathBuf {
    std::path::PathBuf::from(format!("{stem}.{}", format.extension()))
}

fn render_diagram(
    args: &Args,
    renderer: &HeadlessRenderer,
    diagram: SvgDiagram,
    selected: Option<&str>,
    stem: &str,
) -> Result<(), CliError> {
    let svg = renderer.render_svg(diagram, selected)?;
    let options = RasterOptions {
        scale: args.render_scale,
        background: args.background.clone(),
        ..RasterOptions::default()
    };
    let bytes = match args.render_format {
        RenderFormat::Svg => return write_text(&svg, args.out.as_deref()),
        RenderFormat::Png => raster::svg_to_png(&svg, &options)?,
        RenderFormat::Jpeg => raster::svg_to_jpeg(&svg, &options)?,
        RenderFormat::Pdf => raster::svg_to_pdf(&svg)?,
    };
    let out = args
        .out
        .as_ref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| default_raster_out_path(stem, args.render_format));
    std::fs::write(&out, bytes)?;
    tracing::info!(path = %out.display(), "wrote {}", args.render_format.extension());
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CostRowOut<'a> {
    name: &'a str,
    mass: String,
    price_per_kg: String,
    cost: String,
    source: &'a str,
}

fn print_cost(args: &Args) -> Result<(), CliError> {
    let estimate = CostEstimate::bundled();
    if args.json {
        return write_json(&estimate, args.pretty);
    }

    let rows: Vec<CostRowOut<'_>> = estimate
        .rows
        .iter()
        .map(|r| CostRowOut {
            name: r.name(),
            mass: format_mass(r.mass_kg),
            price_per_kg: format_price_per_kg(r.price_per_kg),
            cost: format_currency(r.total_cost),
            source: r.source,
        })
        .collect();
    let name_w = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for r in &rows {
        println!(
            "{:<name_w$}  {:>8}  {:>10}/kg  {:>9}  {}",
            r.name, r.mass, r.price_per_kg, r.cost, r.source
        );
    }
    println!("{:<name_w$}  {}", "Total", format_currency(estimate.total_cost));
    Ok(())
}

fn print_materials(args: &Args) -> Result<(), CliError> {
    let catalog = MaterialCatalog::bundled();
    let filter = MaterialFilter::new(
        args.category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default(),
        args.search.clone().unwrap_or_default(),
    );
    let shown = filter.apply(&catalog);
    if args.json {
        return write_json(&shown, args.pretty);
    }

    if let Some(description) = filter.category_description() {
        println!("{description}");
        println!();
    }
    for m in &shown {
        println!(
            "{:>2}  {:<30}  {:<24}  {:>6}  {}",
            m.id,
            m.name,
            m.category,
            percentage_label(m.chip_percentage),
            m.approximate_mass
        );
    }
    println!("{}", summary_line(shown.len(), catalog.len()));
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveOut<'a> {
    view: ViewId,
    query: &'a str,
    name: &'a str,
    kind: cryoviz::MatchKind,
}

fn resolve(args: &Args, query: &str) -> Result<(), CliError> {
    let view = args.view.unwrap_or(ViewId::Fridge);
    let Some(hit) = MaterialResolver::default().resolve(view, query) else {
        return Err(CliError::NoMatch(query.to_string()));
    };
    write_json(
        &ResolveOut {
            view,
            query,
            name: hit.material.name,
            kind: hit.kind,
        },
        args.pretty,
    )
}

fn detail(args: &Args, config: &ViewerConfig) -> Result<(), CliError> {
    let view = args.view.unwrap_or(config.initial_view);
    let mut state = SelectionState::new(view);
    if let Some(id) = args.select.as_deref() {
        state.components().require(id)?;
        state.select_component(id);
    }
    if let Some(name) = args.material.as_deref() {
        if state.select_material(name).is_none() && state.focus_material(name).is_none() {
            return Err(CliError::NoMatch(name.to_string()));
        }
    }
    write_json(&DetailPanel::from_state(&state), args.pretty)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    let renderer = HeadlessRenderer::from_config(&config);

    match args.command {
        Command::Cost => print_cost(&args),
        Command::Materials => print_materials(&args),
        Command::Chart => {
            let kind = args.chart;
            let stem = format!("chart-{}", chart_stem(kind));
            render_diagram(&args, &renderer, SvgDiagram::Chart(kind), None, &stem)
        }
        Command::Chip => render_diagram(
            &args,
            &renderer,
            SvgDiagram::Chip,
            args.select.as_deref(),
            "chip",
        ),
        Command::Scene => {
            let scene = renderer.render_scene(args.select.as_deref())?;
            write_json(&scene, args.pretty)
        }
        Command::Detail => detail(&args, &config),
        Command::Resolve => {
            let query = args.positional.as_deref().unwrap_or_default();
            resolve(&args, query)
        }
    }
}

fn chart_stem(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::TopMaterials => "top",
        ChartKind::ByCategory => "category",
        ChartKind::Distribution => "pie",
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err @ CliError::NoMatch(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("cryoviz-cli")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_render_flags() {
        let args = parse_args(&argv(&[
            "chip", "--select", "substrate", "--format", "png", "--scale", "2", "--theme", "light",
        ]))
        .unwrap();
        assert!(matches!(args.command, Command::Chip));
        assert_eq!(args.select.as_deref(), Some("substrate"));
        assert_eq!(args.render_format, RenderFormat::Png);
        assert_eq!(args.render_scale, 2.0);
        assert_eq!(args.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn rejects_bad_input() {
        for bad in [
            vec!["chip", "--format", "gif"],
            vec!["chip", "--scale", "0"],
            vec!["chip", "--theme", "sepia"],
            vec!["chip", "extra"],
            vec!["resolve"],
            vec!["chart", "donut"],
            vec!["cost", "--bogus"],
            vec!["--out"],
        ] {
            assert!(
                matches!(parse_args(&argv(&bad)), Err(CliError::Usage(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn chart_kind_is_checked_while_parsing() {
        let args = parse_args(&argv(&["chart"])).unwrap();
        assert_eq!(args.chart, ChartKind::TopMaterials);
        let args = parse_args(&argv(&["chart", "distribution"])).unwrap();
        assert_eq!(args.chart, ChartKind::Distribution);
    }

    #[test]
    fn flags_override_the_config() {
        let args = parse_args(&argv(&["chip", "--theme", "light", "--id", "x"])).unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.diagram_id, "x");
    }
}
