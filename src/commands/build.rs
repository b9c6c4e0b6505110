use crate::*;

pub fn handle_build_command(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    let Commands::Build { .. } = &cli.command else {
        return Ok(false);
    };

    let plan = load_plan(settings)?;
    // A cycle stops the run here, before anything is written.
    let order = plan.order()?;
    let assembly = render(&plan.fragments, &order);
    write_assembly(&settings.output, &assembly)?;

    let report = BuildReport {
        output: settings.output.display().to_string(),
        fragments: order.len(),
        lines: assembly.lines,
        bytes: assembly.text.len(),
        sha256: assembly.sha256_hex(),
        order: plan.fragments.display_names(&order),
        warnings: plan.diagnostics,
    };
    print_one(cli.json, report, |r| {
        format!(
            "assembled {} fragments into {} (sha256 {})",
            r.fragments, r.output, r.sha256
        )
    })?;
    Ok(true)
}
