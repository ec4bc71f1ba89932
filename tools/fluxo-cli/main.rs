use clap::Parser;
use fluxo::gateway::{HttpFlowStore, LoadResponse};
use fluxo::prelude::*;
use itertools::Itertools;
use std::fs;

/// Inspect and validate chatbot flow graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a flow export JSON file (the load-response format)
    flow_path: Option<String>,

    /// Fetch the flow from a live persistence endpoint instead of a file
    #[arg(long, requires = "flow_id")]
    endpoint: Option<String>,

    /// Flow id to fetch when --endpoint is given
    #[arg(long)]
    flow_id: Option<String>,

    /// Exit non-zero if the graph has integrity problems
    #[arg(short, long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let response = match (&cli.endpoint, &cli.flow_path) {
        (Some(endpoint), _) => {
            let flow_id = cli
                .flow_id
                .as_deref()
                .unwrap_or_else(|| exit_with_error("--endpoint requires --flow-id."));
            fetch_remote(endpoint, flow_id)
        }
        (None, Some(path)) => {
            let body = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read flow file '{}': {}", path, e))
            });
            serde_json::from_str(&body).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse flow JSON '{}': {}", path, e))
            })
        }
        (None, None) => exit_with_error("Provide a flow file path or --endpoint with --flow-id."),
    };

    let model = build_model(response);
    print_summary(&model);

    if cli.check {
        run_checks(&model);
    }
}

fn fetch_remote(endpoint: &str, flow_id: &str) -> LoadResponse {
    let runtime = tokio::runtime::Runtime::new()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to start runtime: {}", e)));
    let store = HttpFlowStore::new(endpoint);
    runtime
        .block_on(store.load(flow_id))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow '{}': {}", flow_id, e)))
}

fn build_model(response: LoadResponse) -> GraphModel {
    if !response.success {
        exit_with_error("The server reported an unsuccessful load.");
    }
    let nodes: Vec<Node> = response
        .nodes
        .into_iter()
        .map(|n| {
            n.into_node()
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid node: {}", e)))
        })
        .collect();
    let edges: Vec<Edge> = response.edges.into_iter().map(|e| e.into_edge()).collect();
    // No ensure_start_node here: the inspector reports what is actually
    // persisted, including a missing start node.
    GraphModel::from_parts(nodes, edges)
}

fn print_summary(model: &GraphModel) {
    println!("--- Flow Summary ---");
    println!("Nodes: {}", model.nodes().len());
    println!("Edges: {}", model.edges().len());

    let by_category = model
        .nodes()
        .iter()
        .map(|n| n.node_type.category())
        .counts();
    let categories = by_category
        .iter()
        .sorted_by_key(|(_, count)| std::cmp::Reverse(*count))
        .map(|(cat, count)| format!("{:?}: {}", cat, count))
        .join(", ");
    println!("Categories: {}", categories);

    let by_type = model.nodes().iter().map(|n| n.node_type).counts();
    for (node_type, count) in by_type.iter().sorted_by_key(|(t, _)| t.as_tag()) {
        println!("  {:<18} {}", node_type.as_tag(), count);
    }
}

fn run_checks(model: &GraphModel) {
    let mut problems = Vec::new();

    let start_count = model
        .nodes()
        .iter()
        .filter(|n| n.node_type == NodeType::Start)
        .count();
    if start_count != 1 {
        problems.push(format!("expected exactly 1 start node, found {}", start_count));
    }

    for edge in model.dangling_edges() {
        problems.push(format!(
            "edge '{}' references a missing node ({} -> {})",
            edge.id, edge.from, edge.to
        ));
    }

    let duplicates: Vec<_> = model
        .edges()
        .iter()
        .duplicates_by(|e| (e.from.clone(), e.to.clone()))
        .collect();
    for edge in duplicates {
        problems.push(format!("duplicate edge {} -> {}", edge.from, edge.to));
    }

    if problems.is_empty() {
        println!("\nIntegrity check passed.");
    } else {
        eprintln!("\nIntegrity check failed:");
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
