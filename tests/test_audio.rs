use std::path::Path;

use asset_synth::audio::{ToneParams, default_effects, make_sine, make_test_audio};

fn read_wav(path: &Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = hound::WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

#[test]
fn creates_missing_directory_and_writes_all_effects() {
    let dir = tempfile::tempdir().unwrap();
    let audio_dir = dir.path().join("assets/audio");
    assert!(!audio_dir.exists());

    let written = make_test_audio(dir.path(), &default_effects()).unwrap();
    assert!(audio_dir.is_dir());

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["swap.wav", "match.wav", "ambient.wav"]);

    for (path, expected_len) in written.iter().zip([3528usize, 7938, 352_800]) {
        let (spec, samples) = read_wav(path);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(samples.len(), expected_len);
        assert_eq!(samples[0], 0);
    }
}

#[test]
fn second_run_over_existing_directory_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    make_test_audio(dir.path(), &default_effects()).unwrap();
    make_test_audio(dir.path(), &default_effects()).unwrap();
}

#[test]
fn written_samples_match_synthesis() {
    let dir = tempfile::tempdir().unwrap();
    make_test_audio(dir.path(), &default_effects()).unwrap();

    let (_, samples) = read_wav(&dir.path().join("assets/audio/match.wav"));
    let expected = make_sine(&ToneParams::new(440.0, 0.18, 0.28)).unwrap();
    assert_eq!(samples, expected);
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak <= (32767.0 * 0.28) as u16);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    make_test_audio(a.path(), &default_effects()).unwrap();
    make_test_audio(b.path(), &default_effects()).unwrap();

    for name in ["swap.wav", "match.wav", "ambient.wav"] {
        let rel = Path::new("assets/audio").join(name);
        assert_eq!(
            std::fs::read(a.path().join(&rel)).unwrap(),
            std::fs::read(b.path().join(&rel)).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn unwritable_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the `assets` directory should go.
    std::fs::write(dir.path().join("assets"), b"").unwrap();
    assert!(make_test_audio(dir.path(), &default_effects()).is_err());
}
