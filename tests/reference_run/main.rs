use sunmodel::run_transposition::{run, TranspositionOptions};
use sunmodel::Float;

const INPUT: &str = "./tests/reference_run/LiuJordanData.csv";

/// Columns of results computed beforehand for the two surfaces
/// used in these tests. They were produced in double precision,
/// with the truncated conversion factor.
#[cfg(not(any(feature = "exact_pi", feature = "float")))]
fn load_expected(column: usize) -> Result<Vec<Float>, String> {
    let s = std::fs::read_to_string("./tests/reference_run/expected.csv")
        .map_err(|e| e.to_string())?;
    s.lines()
        .skip(1)
        .map(|line| {
            line.split(',')
                .nth(column)
                .ok_or(format!("No column {} in '{}'", column, line))?
                .parse::<Float>()
                .map_err(|e| e.to_string())
        })
        .collect()
}

#[cfg(not(any(feature = "exact_pi", feature = "float")))]
fn check(found: &[Float], expected: &[Float]) {
    assert_eq!(found.len(), expected.len());
    for (i, (f, e)) in found.iter().zip(expected.iter()).enumerate() {
        assert!(
            (f - e).abs() < 1e-6,
            "row {}: expected {}, found {}",
            i,
            e,
            f
        );
    }
}

#[test]
fn test_default_surface() -> Result<(), String> {
    // cargo test --release --package sunmodel --test reference_run -- --nocapture
    let options = TranspositionOptions {
        input_file: INPUT.to_string(),
        ..TranspositionOptions::default()
    };

    let mut out: Vec<u8> = Vec::new();
    let transposed = run(&options, &mut out)?;
    assert_eq!(transposed.len(), 48);
    #[cfg(not(any(feature = "exact_pi", feature = "float")))]
    check(transposed.modeled(), &load_expected(0)?);

    // The output keeps every column, and adds the modeled one
    let written = String::from_utf8(out).map_err(|e| e.to_string())?;
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("Month,Day,Hour,ISH,IDH,LJ_model"));
    let first = lines.next().ok_or("No data written")?;
    assert!(first.starts_with("6,172,0,0.0,0.0,"));
    assert_eq!(lines.count(), 47);

    Ok(())
}

#[test]
fn test_surface_file_and_chart() -> Result<(), String> {
    let plot = std::env::temp_dir().join("sunmodel_reference_run.svg");
    let options = TranspositionOptions {
        input_file: INPUT.to_string(),
        surface_file: Some("./tests/reference_run/surface.json".to_string()),
        plot: Some(plot.to_string_lossy().to_string()),
        // Ignored, since there is a surface file
        tilt: 0.,
        ..TranspositionOptions::default()
    };

    let transposed = run(&options, std::io::sink())?;
    assert_eq!(transposed.len(), 48);
    #[cfg(not(any(feature = "exact_pi", feature = "float")))]
    check(transposed.modeled(), &load_expected(1)?);

    let svg = std::fs::read_to_string(&plot).map_err(|e| e.to_string())?;
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<polyline").count(), 3);

    Ok(())
}

#[test]
fn test_horizontal_surface() -> Result<(), String> {
    let options = TranspositionOptions {
        input_file: INPUT.to_string(),
        tilt: 0.,
        ..TranspositionOptions::default()
    };

    let transposed = run(&options, std::io::sink())?;
    for (s, found) in transposed.samples().iter().zip(transposed.modeled()) {
        let expected = s.direct_radiation + s.indirect_radiation;
        assert!((expected - found).abs() < 1e-6);
    }
    Ok(())
}
