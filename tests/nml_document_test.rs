//! End-to-end tests: JSON config input through document assembly to the
//! final `.nml` text and file output.

use glm_prep::dimensions::TruncatedPyramid;
use glm_prep::json::JsonConfig;
use glm_prep::nml::{
    GlmSetup, InitProfiles, Meteorology, Morphometry, NmlDocument, NmlError, Number, Time,
};

const SPARKLING_JSON: &str = r#"{
    "&glm_setup": {
        "sim_name": "Sparkling Lake",
        "max_layers": 500,
        "min_layer_vol": 0.5,
        "min_layer_thick": 0.15,
        "max_layer_thick": 1.5,
        "density_model": 1,
        "non_avg": true
    },
    "&morphometry": {
        "lake_name": "Sparkling",
        "latitude": 46.00881,
        "longitude": -89.69953,
        "crest_elev": 320.0,
        "bsn_len": 901.0385,
        "bsn_wid": 841.9744,
        "bsn_vals": 3,
        "H": [301.712, 310.712, 320.0],
        "A": [0, 125000, 250000]
    },
    "&time": {
        "timefmt": 3,
        "start": "1980-04-15 00:00:00",
        "stop": "2012-12-10 00:00:00",
        "dt": 3600.0,
        "timezone": -6.0
    },
    "&init_profiles": {
        "lake_depth": 18.288,
        "num_depths": 3,
        "the_depths": [0.0, 0.2, 18.288],
        "the_temps": [3.0, 4.0, 4.0],
        "the_sals": [0.0, 0.0, 0.0]
    },
    "&meteorology": {
        "met_sw": true,
        "meteo_fl": "bcs/nldas_driver.csv",
        "subdaily": true,
        "lw_type": "LW_IN",
        "wind_factor": 1.0,
        "sw_factor": 1.08
    }
}"#;

const SPARKLING_NML: &str = "\
&glm_setup
   sim_name = 'Sparkling Lake'
   max_layers = 500
   min_layer_vol = 0.5
   min_layer_thick = 0.15
   max_layer_thick = 1.5
   density_model = 1
   non_avg = .true.
/
&morphometry
   lake_name = 'Sparkling'
   latitude = 46.00881
   longitude = -89.69953
   crest_elev = 320.0
   bsn_len = 901.0385
   bsn_wid = 841.9744
   bsn_vals = 3
   H = 301.712, 310.712, 320.0
   A = 0, 125000, 250000
/
&time
   timefmt = 3
   start = '1980-04-15 00:00:00'
   stop = '2012-12-10 00:00:00'
   dt = 3600.0
   timezone = -6.0
/
&init_profiles
   lake_depth = 18.288
   num_depths = 3
   the_depths = 0.0, 0.2, 18.288
   the_temps = 3.0, 4.0, 4.0
   the_sals = 0.0, 0.0, 0.0
/
&meteorology
   met_sw = .true.
   meteo_fl = 'bcs/nldas_driver.csv'
   subdaily = .true.
   sw_factor = 1.08
   lw_type = 'LW_IN'
   wind_factor = 1.0
/
";

#[test]
fn test_json_to_nml_text() {
    let doc = JsonConfig::from_str(SPARKLING_JSON)
        .unwrap()
        .to_document()
        .unwrap();
    assert_eq!(doc.serialize(), SPARKLING_NML);
}

#[test]
fn test_json_to_nml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparkling.nml");

    let doc = JsonConfig::from_str(SPARKLING_JSON)
        .unwrap()
        .to_document()
        .unwrap();
    doc.write_nml(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SPARKLING_NML);
}

#[test]
fn test_programmatic_document_matches_json_path() {
    // Building the same configuration through the typed API produces the
    // same text as the JSON path
    let json_doc = JsonConfig::from_str(
        r#"{
            "glm_setup": {"sim_name": "Lake A", "max_layers": 500, "non_avg": true},
            "morphometry": {},
            "time": {},
            "init_profiles": {}
        }"#,
    )
    .unwrap()
    .to_document()
    .unwrap();

    let typed_doc = NmlDocument::builder()
        .setup(GlmSetup {
            sim_name: Some("Lake A".into()),
            max_layers: Some(500),
            non_avg: Some(true),
            ..Default::default()
        })
        .morphometry(Morphometry::default())
        .time(Time::default())
        .init_profiles(InitProfiles::default())
        .build()
        .unwrap();

    assert_eq!(json_doc.serialize(), typed_doc.serialize());
    assert!(typed_doc
        .serialize()
        .starts_with("&glm_setup\n   sim_name = 'Lake A'\n   max_layers = 500\n   non_avg = .true.\n/\n"));
}

#[test]
fn test_dimensions_feed_morphometry() {
    // A small dam's computed profile becomes the morphometry H/A lists
    let dam = TruncatedPyramid::new(3.0, 5.0, 5.0, 3.0).unwrap();
    let crest_elev = 100.0;

    let h: Vec<Number> = dam
        .heights()
        .iter()
        .map(|height| Number::Float(crest_elev + height))
        .collect();
    let a: Vec<Number> = dam
        .surface_areas()
        .iter()
        .map(|&area| Number::Float((area * 1000.0).round() / 1000.0))
        .collect();

    let morphometry = Morphometry {
        lake_name: Some("Farm Dam".into()),
        crest_elev: Some(Number::Float(crest_elev)),
        bsn_vals: Some(Number::Int(h.len() as i64)),
        h: Some(h),
        a: Some(a),
        ..Default::default()
    };

    let doc = NmlDocument::builder()
        .setup(GlmSetup::default())
        .morphometry(morphometry)
        .time(Time::default())
        .init_profiles(InitProfiles::default())
        .build()
        .unwrap();

    let text = doc.serialize();
    assert!(text.contains("   H = 97.0, 98.0, 99.0, 100.0\n"), "{text}");
    assert!(text.contains("   bsn_vals = 4\n"), "{text}");
}

#[test]
fn test_populate_error_surfaces_block_and_param() {
    let result = JsonConfig::from_str(
        r#"{
            "glm_setup": {"max_layers": "many"},
            "morphometry": {},
            "time": {},
            "init_profiles": {}
        }"#,
    )
    .unwrap()
    .to_document();

    match result {
        Err(NmlError::InvalidParameterType { block, param, expected, found }) => {
            assert_eq!(block, "glm_setup");
            assert_eq!(param, "max_layers");
            assert_eq!(expected, "integer");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_optional_meteorology_block_present() {
    // A partially populated optional block appears between init_profiles
    // and inflows, never earlier
    let doc = JsonConfig::from_str(SPARKLING_JSON)
        .unwrap()
        .to_document()
        .unwrap();
    let text = doc.serialize();

    let init_pos = text.find("&init_profiles").unwrap();
    let met_pos = text.find("&meteorology").unwrap();
    assert!(met_pos > init_pos);
}

#[test]
fn test_aggregated_meteorology_fields() {
    let mut met = Meteorology::default();
    let attrs = match serde_json::from_str::<serde_json::Value>(
        r#"{"met_sw": true, "ce": 0.0013, "ch": 0.0013, "cd": 0.0013}"#,
    )
    .unwrap()
    {
        serde_json::Value::Object(m) => m,
        _ => unreachable!(),
    };
    use glm_prep::nml::NmlBlock;
    met.set_attributes(&attrs, None).unwrap();

    let expected = "&meteorology\n\
                    \x20  met_sw = .true.\n\
                    \x20  ce = 0.0013\n\
                    \x20  ch = 0.0013\n\
                    \x20  cd = 0.0013\n\
                    /";
    assert_eq!(met.render(), expected);
}
