use gonogo::workflows::partnership::EvaluationOutcome;

/// Plain-text rendering of one evaluation for terminal output.
pub(crate) fn render_report(outcome: &EvaluationOutcome) -> String {
    let result = &outcome.result;
    let revenue = &outcome.revenue;
    let scores = &outcome.sub_scores;
    let name = if outcome.project_name.trim().is_empty() {
        "(projeto sem nome)"
    } else {
        outcome.project_name.as_str()
    };

    let mut lines = vec![
        format!("Go/No-Go evaluation: {name}"),
        format!(
            "- Decision: {} (score {}/100)",
            result.decision.label(),
            result.final_score
        ),
        format!("  {}", result.explanation),
        String::new(),
        "Category scores (0-10)".to_string(),
    ];
    for (label, score) in [
        ("Financeiro", scores.financial),
        ("Operacional", scores.operational),
        ("Risco", scores.risk),
        ("Estratégia", scores.strategy),
        ("Receita de reforma", scores.reform_revenue),
        ("Comunicação", scores.communication),
    ] {
        lines.push(format!("  - {label}: {score:.1}"));
    }

    lines.push(String::new());
    lines.push(format!("Reform revenue ({} units)", outcome.total_units));
    lines.push(format!(
        "  - Gross R$ {:.2}{}",
        revenue.gross_reform_revenue,
        if revenue.capped { " (capped)" } else { "" }
    ));
    lines.push(format!(
        "  - Commission R$ {:.2} ({:.1}% of gross)",
        revenue.commission, revenue.commission_share_pct
    ));
    lines.push(format!(
        "  - Net R$ {:.2} | R$ {:.2} per unit",
        revenue.net_reform_revenue, revenue.net_revenue_per_unit
    ));
    if revenue.adhesion_over_limit {
        lines.push(format!(
            "  - Warning: package adhesion sums to {:.0}%",
            revenue.total_adhesion
        ));
    }

    lines.push(String::new());
    if result.gates.is_empty() {
        lines.push("Governance gates: none triggered".to_string());
    } else {
        lines.push("Governance gates".to_string());
        for gate in &result.gates {
            let marker = if gate.is_critical() { "CRITICAL" } else { "warning" };
            lines.push(format!(
                "  - [{marker}] {} | current {} | limit {}",
                gate.title, gate.current, gate.threshold
            ));
        }
    }

    push_section(&mut lines, "Conditions", &result.conditions);
    push_section(&mut lines, "Remediation", &result.remediation_actions);
    if let Some(advisory) = &result.warning_advisory {
        lines.push(String::new());
        lines.push(format!("Advisory: {advisory}"));
    }
    if result.renegotiation.needed {
        push_section(&mut lines, "Renegotiation", &result.renegotiation.reasons);
    }

    let analysis = &outcome.analysis;
    lines.push(String::new());
    lines.push("Operations".to_string());
    lines.push(format!(
        "  - Peak utilization {:.0}% | {} engineers needed",
        analysis.operations.peak_utilization_pct, analysis.operations.engineers_needed
    ));
    for bottleneck in &analysis.operations.bottlenecks {
        lines.push(format!("  - {}: {}", bottleneck.title, bottleneck.description));
    }
    if analysis.schedule.months > 0 {
        lines.push(format!(
            "  - Schedule {} months | R$ {:.2} operating cost",
            analysis.schedule.months, analysis.schedule.operating_cost
        ));
    }
    if let Some(advisory) = &analysis.schedule.advisory {
        lines.push(format!("  - {}", advisory.message()));
    }

    lines.push(String::new());
    lines.push("Suggested actions".to_string());
    for action in &analysis.insights.suggested_actions {
        lines.push(format!(
            "  - [{}] {}: {}",
            action.priority.label(),
            action.action,
            action.description
        ));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("  - {item}")));
}
