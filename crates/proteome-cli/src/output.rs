//! Output formatting utilities

use clap::ValueEnum;
use proteome_core::{FunctionalAnnotation, GoTermHit, Protein, ProteinInteraction};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Serialize as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn score(value: Option<f64>) -> String {
    value.map(|s| format!("{:.3}", s)).unwrap_or_else(|| "-".to_string())
}

pub fn protein_row(protein: &Protein) -> String {
    format!(
        "{:<16} {:<14} {:<24} {}",
        protein.id,
        cell(protein.external_id.as_deref()),
        cell(protein.name.as_deref()),
        cell(protein.organism_name.as_deref().or(protein.organism.as_deref())),
    )
}

pub fn protein_details(protein: &Protein) -> String {
    let mut lines = vec![
        format!("id:            {}", protein.id),
        format!("uuid:          {}", cell(protein.uuid.as_deref())),
        format!("name:          {}", cell(protein.name.as_deref())),
        format!("external id:   {}", cell(protein.external_id.as_deref())),
        format!("organism:      {}", cell(protein.organism.as_deref())),
        format!("organism name: {}", cell(protein.organism_name.as_deref())),
        format!("dataset:       {}", cell(protein.dataset.as_deref())),
        format!("node type:     {}", cell(protein.node_type.as_deref())),
    ];
    if let Some(date) = protein.date {
        lines.push(format!("date:          {}", date.format("%Y-%m-%d")));
    }
    if !protein.secondary_ids().is_empty() {
        lines.push(format!("secondary ids: {}", protein.secondary_ids().join(", ")));
    }
    if !protein.ambiguous_secondary_ids().is_empty() {
        lines.push(format!(
            "ambiguous ids: {}",
            protein.ambiguous_secondary_ids().join(", ")
        ));
    }
    if let Some(sequence) = protein.protein_sequence.as_deref() {
        lines.push(format!("sequence:      {} aa", sequence.len()));
    }
    lines.join("\n")
}

pub fn annotation_row(annotation: &FunctionalAnnotation) -> String {
    format!(
        "{:<14} {:<36} {:<6} {:>7} {:>7} {}",
        annotation.go_term_id,
        cell(annotation.go_term_name.as_deref()),
        cell(annotation.go_code.as_deref()),
        score(annotation.ml_prediction_score),
        score(annotation.string_combined_score),
        cell(annotation.dataset.as_deref()),
    )
}

pub fn interaction_row(interaction: &ProteinInteraction) -> String {
    format!(
        "{:<16} {:<24} {:>7} {:>7} {}",
        interaction.target_protein_id,
        cell(interaction.target_protein_name.as_deref()),
        score(interaction.ml_prediction_score),
        score(interaction.string_combined_score),
        cell(interaction.dataset.as_deref()),
    )
}

pub fn go_term_hit_row(hit: &GoTermHit<'_>) -> String {
    format!("{:>7} {}", score(Some(hit.score)), protein_row(hit.protein))
}
