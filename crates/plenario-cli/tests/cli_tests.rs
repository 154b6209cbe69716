//! Integration tests for file loading and command plumbing

use plenario_cli::cli::{InputArgs, PolicyArg};
use plenario_cli::commands::{edges::select_edges, load_builder};
use plenario_cli::config::OutputFormat;
use plenario_cli::{CliError, Config, Formatter};
use plenario_domain::LegislatorId;
use plenario_network::{NetworkError, NodeLinkGraph};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FRENTES: &str = r#"[
    {"id_deputado": 1, "nome_deputado": "A", "siglaPartido_deputado": "PT", "siglaUf_deputado": "SP", "titulo": "FrenteX"},
    {"id_deputado": 1, "nome_deputado": "A", "siglaPartido_deputado": "PT", "siglaUf_deputado": "SP", "titulo": "FrenteY"},
    {"id_deputado": 2, "nome_deputado": "B", "siglaPartido_deputado": "PSDB", "siglaUf_deputado": "RJ", "titulo": "FrenteY"},
    {"id_deputado": 2, "nome_deputado": "B", "siglaPartido_deputado": "PSDB", "siglaUf_deputado": "RJ", "titulo": "FrenteZ"}
]"#;

const VOTOS: &str = r#"[
    {"id": "v1", "tipoVoto": "Sim", "id_deputado": 1, "nome": "A", "siglaPartido": "PT", "siglaUf": "SP"},
    {"id": "v1", "tipoVoto": "Sim", "id_deputado": 2, "nome": "B", "siglaPartido": "PL", "siglaUf": "RJ"},
    {"id": "v2", "tipoVoto": "Não", "id_deputado": 1, "nome": "A", "siglaPartido": "PT", "siglaUf": "SP"},
    {"id": "v2", "tipoVoto": "Sim", "id_deputado": 2, "nome": "B", "siglaPartido": "PL", "siglaUf": "RJ"},
    {"id": "v2", "tipoVoto": "Sim", "id_deputado": 3, "nome": "C", "siglaPartido": "PL", "siglaUf": "MG"}
]"#;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> InputArgs {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    InputArgs {
        input: path,
        policy: PolicyArg::Membership,
    }
}

#[test]
fn test_membership_file() {
    let dir = TempDir::new().unwrap();
    let args = write_input(&dir, "frentes.json", FRENTES);

    let builder = load_builder(&args, &Config::default().columns).unwrap();
    let graph = builder.get_network();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.weight(LegislatorId::new(1), LegislatorId::new(2)), Some(1));
}

#[test]
fn test_agreement_file() {
    let dir = TempDir::new().unwrap();
    let mut args = write_input(&dir, "votos.json", VOTOS);
    args.policy = PolicyArg::Agreement;

    let builder = load_builder(&args, &Config::default().columns).unwrap();
    let weights: Vec<i64> = select_edges(&builder, None, None)
        .iter()
        .map(|e| e.weight())
        .collect();
    assert_eq!(weights, vec![-1, 0, 1]);
    assert_eq!(builder.stats().events, 2);
}

#[test]
fn test_wrong_policy_for_file() {
    let dir = TempDir::new().unwrap();
    let args = write_input(&dir, "votos.json", VOTOS);

    let err = load_builder(&args, &Config::default().columns).unwrap_err();
    assert!(matches!(
        err,
        CliError::Network(NetworkError::InvalidInput { .. })
    ));
}

#[test]
fn test_missing_input_file() {
    let args = InputArgs {
        input: Path::new("/nonexistent/plenario/input.json").to_path_buf(),
        policy: PolicyArg::Agreement,
    };
    assert!(matches!(
        load_builder(&args, &Config::default().columns),
        Err(CliError::Io(_))
    ));
}

#[test]
fn test_non_array_input() {
    let dir = TempDir::new().unwrap();
    let args = write_input(&dir, "bad.json", r#"{"id_deputado": 1}"#);
    assert!(matches!(
        load_builder(&args, &Config::default().columns),
        Err(CliError::Network(_))
    ));
}

#[test]
fn test_custom_columns_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[columns.membership]\ngroup_label = \"frente\"\n",
    )
    .unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let renamed = FRENTES.replace("\"titulo\"", "\"frente\"");
    let args = write_input(&dir, "frentes.json", &renamed);

    let builder = load_builder(&args, &config.columns).unwrap();
    assert_eq!(builder.get_network().edge_count(), 1);
}

#[test]
fn test_export_document() {
    let dir = TempDir::new().unwrap();
    let mut args = write_input(&dir, "votos.json", VOTOS);
    args.policy = PolicyArg::Agreement;
    let builder = load_builder(&args, &Config::default().columns).unwrap();

    let document = NodeLinkGraph::from_graph(builder.get_network());
    let path = dir.path().join("rede.json");
    document.write_json(fs::File::create(&path).unwrap()).unwrap();

    let parsed: NodeLinkGraph = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, document);
    assert!(!parsed.directed);
    assert_eq!(parsed.nodes.len(), 3);
    assert_eq!(parsed.links.len(), 3);
}

#[test]
fn test_formatted_summary() {
    let dir = TempDir::new().unwrap();
    let args = write_input(&dir, "frentes.json", FRENTES);
    let builder = load_builder(&args, &Config::default().columns).unwrap();

    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = formatter.format_stats(builder.stats()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["policy"], "membership");
    assert_eq!(parsed["nodes"], 2);
    assert_eq!(parsed["edges"], 1);
}
