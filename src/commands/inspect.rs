use crate::*;

pub fn handle_inspect_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Order => {
            let plan = load_plan(settings)?;
            let names = plan.order_names()?;
            print_out(cli.json, &names, |n| n.to_string())?;
        }
        Commands::Graph => {
            let plan = load_plan(settings)?;
            print_out(cli.json, &plan.entries(), |e| {
                if e.dependencies.is_empty() {
                    format!("{}\t-", e.path)
                } else {
                    format!("{}\t{}", e.path, e.dependencies.join(", "))
                }
            })?;
        }
        Commands::Check { strict } => {
            let plan = load_plan(settings)?;
            plan.order()?;
            if *strict && !plan.diagnostics.is_empty() {
                return Err(StitchError::Unresolved {
                    count: plan.diagnostics.len(),
                }
                .into());
            }
            let report = CheckReport {
                root: settings.root.display().to_string(),
                fragments: plan.fragments.len(),
                edges: plan.graph.edge_count(),
                unresolved: plan.diagnostics,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "ok: {} fragments, {} edges, {} unresolved",
                    r.fragments,
                    r.edges,
                    r.unresolved.len()
                )
            })?;
        }
        Commands::Build { .. } => return Ok(false),
    }
    Ok(true)
}
