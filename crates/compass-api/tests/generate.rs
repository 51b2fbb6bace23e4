//! Integration tests for static API generation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use compass_api::{ApiIndex, GenerateOptions, build_index, generate, load_records};
use compass_model::{ApiResponse, ControlRecord, Mappings};
use serde_json::Value;

fn record(id: &str, standard: &str, category: &str, mappings: Mappings) -> ControlRecord {
    ControlRecord {
        id: id.to_string(),
        standard: standard.to_string(),
        category: category.to_string(),
        title: format!("{id} title"),
        description: format!("{id} description"),
        mappings,
        recommendation: format!("{id} recommendation"),
        extra: Default::default(),
    }
}

fn records() -> Vec<ControlRecord> {
    vec![
        record(
            "OPSC-C1",
            "OWASP",
            "Secure Design & Architecture",
            Mappings {
                owasp: vec!["OPSC-C1".to_string()],
                iso27001: vec!["A.14.1.1".to_string()],
                nist: vec!["PO.1.1".to_string()],
            },
        ),
        record(
            "A.9.2.1",
            "ISO27001",
            "Access Control",
            Mappings {
                owasp: vec![],
                iso27001: vec![],
                nist: vec!["PW.1".to_string()],
            },
        ),
        record("PO.1-1", "NIST", "Secure design and architecture", Mappings::default()),
        record("OPSC-C2", "OWASP", "Access Control", Mappings::default()),
    ]
}

fn options() -> GenerateOptions {
    GenerateOptions::default().with_generated_at(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap())
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn read_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                files.insert(relative, fs::read(&path).unwrap());
            }
        }
    }
    files
}

#[test]
fn writes_expected_file_tree() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(&records(), dir.path(), &options()).unwrap();

    let files: Vec<String> = read_tree(dir.path())
        .keys()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        files,
        [
            "all.json",
            "categories/access-control.json",
            "categories/secure-design-and-architecture.json",
            "categories/secure-design-architecture.json",
            "controls/a-9-2-1.json",
            "controls/opsc-c1.json",
            "controls/opsc-c2.json",
            "controls/po-1-1.json",
            "index.json",
            "mappings/a-9-2-1.json",
            "mappings/opsc-c1.json",
            "mappings/opsc-c2.json",
            "mappings/po-1-1.json",
            "standards/iso27001.json",
            "standards/nist.json",
            "standards/owasp.json",
        ]
    );
    assert_eq!(summary.controls, 4);
    assert_eq!(summary.standards.len(), 3);
    assert_eq!(summary.categories.len(), 3);
    assert_eq!(summary.total_files(), 4 * 2 + 3 + 3 + 2);
}

#[test]
fn envelopes_carry_meta() {
    let dir = tempfile::tempdir().unwrap();
    generate(&records(), dir.path(), &options()).unwrap();

    let all = read_json(&dir.path().join("all.json"));
    assert_eq!(all["meta"]["version"], "1.0.0");
    assert_eq!(all["meta"]["generated"], "2025-01-02T03:04:05.000000Z");
    assert_eq!(all["meta"]["total"], 4);
    assert_eq!(all["meta"]["endpoint"], "/api/all.json");

    let owasp = read_json(&dir.path().join("standards/owasp.json"));
    assert_eq!(owasp["meta"]["total"], 2);
    assert_eq!(owasp["meta"]["endpoint"], "/api/standards/owasp.json");
    assert_eq!(owasp["data"][0]["id"], "OPSC-C1");
    assert_eq!(owasp["data"][1]["id"], "OPSC-C2");

    let control = read_json(&dir.path().join("controls/a-9-2-1.json"));
    assert_eq!(control["meta"]["total"], 1);
    assert_eq!(control["meta"]["endpoint"], "/api/controls/a-9-2-1.json");
    assert_eq!(control["data"]["recommendation"], "A.9.2.1 recommendation");
}

#[test]
fn categories_merge_on_slug_and_keep_input_order() {
    let dir = tempfile::tempdir().unwrap();
    generate(&records(), dir.path(), &options()).unwrap();

    let access = read_json(&dir.path().join("categories/access-control.json"));
    let ids: Vec<&str> = access["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["A.9.2.1", "OPSC-C2"]);
}

#[test]
fn mapping_endpoint_holds_projection() {
    let dir = tempfile::tempdir().unwrap();
    generate(&records(), dir.path(), &options()).unwrap();

    let mapping = read_json(&dir.path().join("mappings/opsc-c1.json"));
    let data = mapping["data"].as_object().unwrap();
    let mut keys: Vec<&str> = data.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["id", "mappings", "standard", "title"]);
    assert_eq!(mapping["data"]["mappings"]["nist"][0], "PO.1.1");
    assert_eq!(mapping["meta"]["endpoint"], "/api/mappings/opsc-c1.json");
}

#[test]
fn records_round_trip_into_partitions() {
    let dir = tempfile::tempdir().unwrap();
    let records = records();
    let source = dir.path().join("app-data.json");
    fs::write(&source, serde_json::to_string_pretty(&records).unwrap()).unwrap();
    let loaded = load_records(&source).unwrap();
    let output = dir.path().join("api");
    generate(&loaded, &output, &options()).unwrap();

    for record in &records {
        let standard = record.standard.to_lowercase();
        let text = fs::read_to_string(output.join(format!("standards/{standard}.json"))).unwrap();
        let partition: ApiResponse<Vec<ControlRecord>> = serde_json::from_str(&text).unwrap();
        assert!(partition.data.contains(record));

        let slug = compass_api::slugify(&record.id);
        let text = fs::read_to_string(output.join(format!("controls/{slug}.json"))).unwrap();
        let single: ApiResponse<ControlRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(&single.data, record);
    }
}

#[test]
fn unknown_keys_and_nulls_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("app-data.json");
    fs::write(
        &source,
        r#"[
  {
    "id": "OPSC-C1",
    "standard": "OWASP",
    "category": "Secure Design",
    "title": "Define security requirements",
    "description": null,
    "mappings": {"owasp": ["OPSC-C1"], "iso27001": [], "nist": []},
    "recommendation": "Document them",
    "references": ["https://owasp.org"]
  }
]
"#,
    )
    .unwrap();
    let loaded = load_records(&source).unwrap();
    let output = dir.path().join("api");
    generate(&loaded, &output, &options()).unwrap();

    let control = read_json(&output.join("controls/opsc-c1.json"));
    assert_eq!(
        control["data"]["references"],
        serde_json::json!(["https://owasp.org"])
    );
    assert_eq!(control["data"]["description"], "");

    let partition = read_json(&output.join("standards/owasp.json"));
    assert_eq!(partition["data"][0]["references"][0], "https://owasp.org");
    assert_eq!(read_json(&output.join("all.json"))["data"][0], control["data"]);
}

#[test]
fn regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate(&records(), first.path(), &options()).unwrap();
    generate(&records(), second.path(), &options()).unwrap();
    // Overwriting in place must also be stable.
    generate(&records(), second.path(), &options()).unwrap();

    assert_eq!(read_tree(first.path()), read_tree(second.path()));
}

#[test]
fn later_control_wins_on_slug_collision() {
    let dir = tempfile::tempdir().unwrap();
    let records = vec![
        record("A.5.1", "ISO27001", "Policy", Mappings::default()),
        record("A-5-1", "ISO27001", "Policy", Mappings::default()),
    ];
    let summary = generate(&records, dir.path(), &options()).unwrap();

    let control = read_json(&dir.path().join("controls/a-5-1.json"));
    assert_eq!(control["data"]["id"], "A-5-1");
    assert_eq!(summary.control_endpoints, 2);
}

#[test]
fn empty_record_set_still_writes_index() {
    let dir = tempfile::tempdir().unwrap();
    let summary = generate(&[], dir.path(), &options()).unwrap();

    assert_eq!(summary.total_files(), 2);
    let index: ApiIndex =
        serde_json::from_str(&fs::read_to_string(dir.path().join("index.json")).unwrap()).unwrap();
    assert!(index.endpoints.categories.is_empty());
    assert_eq!(read_json(&dir.path().join("all.json"))["meta"]["total"], 0);
}

#[test]
fn missing_record_set_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("app-data.json")).unwrap_err();
    assert!(matches!(err, compass_api::ApiError::FileNotFound { .. }));
}

#[test]
fn index_document_snapshot() {
    let index = build_index(
        &["secure-design-architecture", "access-control"][..],
        &options(),
    );
    insta::assert_json_snapshot!(index, @r#"
    {
      "meta": {
        "version": "1.0.0",
        "generated": "2025-01-02T03:04:05.000000Z"
      },
      "endpoints": {
        "all_controls": "/api/all.json",
        "standards": {
          "owasp": "/api/standards/owasp.json",
          "iso27001": "/api/standards/iso27001.json",
          "nist": "/api/standards/nist.json"
        },
        "categories": [
          "/api/categories/access-control.json",
          "/api/categories/secure-design-architecture.json"
        ],
        "individual_controls": "/api/controls/{control-id}.json",
        "mappings": "/api/mappings/{control-id}.json"
      },
      "usage": {
        "base_url": "https://secuardenai.github.io/compliance-compass",
        "example": "https://secuardenai.github.io/compliance-compass/api/standards/owasp.json"
      }
    }
    "#);
}
