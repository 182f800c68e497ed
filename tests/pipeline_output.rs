use keydump::{
    generate, Alphabet, BatchObserver, BatchSink, Config, KeydumpError, SilentObserver,
    DEFAULT_CHARSET,
};
use sha2::{Digest, Sha256};

/// Digest of the single byte `"0"`, from the SHA-256 reference vectors.
const SHA256_OF_ZERO: &str = "5feceb66ffc86f38d952786c6d696c79c2dbc239dd4e91b46729d73a27fb57e9";

fn run_to_vec(charset: &str, length: u32, batch_size: u64) -> Vec<u8> {
    let config = Config::new(Alphabet::new(charset).unwrap(), length, batch_size).unwrap();
    let mut out = Vec::new();
    generate(&config, &mut out, &mut SilentObserver).unwrap();
    out
}

#[test]
fn known_digest_anchor() {
    let out = run_to_vec(DEFAULT_CHARSET, 1, 1);
    let first = out.split(|&b| b == b'\n').next().unwrap();
    assert_eq!(first, format!("0 {SHA256_OF_ZERO}").as_bytes());
}

#[test]
fn two_character_scenario() {
    let out = run_to_vec("01", 2, 1);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for (line, cand) in lines.iter().zip(["00", "01", "10", "11"]) {
        let digest = hex::encode(Sha256::digest(cand.as_bytes()));
        assert_eq!(*line, format!("{cand} {digest}"));
    }
}

#[test]
fn single_character_alphabet() {
    let out = run_to_vec("a", 5, 1_000);
    let text = String::from_utf8(out).unwrap();
    let digest = hex::encode(Sha256::digest(b"aaaaa"));
    assert_eq!(text, format!("aaaaa {digest}\n"));
}

#[test]
fn stats_and_artifact_size_are_deterministic() {
    let config = Config::new(Alphabet::new("01").unwrap(), 3, 3).unwrap();
    let mut out = Vec::new();
    let stats = generate(&config, &mut out, &mut SilentObserver).unwrap();
    assert_eq!(stats.records, 8);
    assert_eq!(stats.batches, 3);
    // 8 records of 3 + 1 + 64 + 1 bytes
    assert_eq!(stats.bytes_written, 8 * 69);
    assert_eq!(out.len() as u64, stats.bytes_written);
}

struct CountingObserver {
    completions: Vec<(u64, f64)>,
    finished: u32,
}

impl BatchObserver for CountingObserver {
    fn batch_complete(&mut self, index: u64, fraction: f64) {
        self.completions.push((index, fraction));
    }

    fn finished(&mut self) {
        self.finished += 1;
    }
}

#[test]
fn observer_sees_every_batch_once() {
    let config = Config::new(Alphabet::new("01").unwrap(), 4, 5).unwrap();
    let mut out = Vec::new();
    let mut obs = CountingObserver {
        completions: Vec::new(),
        finished: 0,
    };
    generate(&config, &mut out, &mut obs).unwrap();
    // 16 candidates in batches of 5
    assert_eq!(obs.completions.len(), 4);
    assert_eq!(obs.finished, 1);
    let indices: Vec<u64> = obs.completions.iter().map(|c| c.0).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    let fractions: Vec<f64> = obs.completions.iter().map(|c| c.1).collect();
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
}

struct FailingSink;

impl BatchSink for FailingSink {
    fn write_batch(&mut self, _batch: &[u8]) -> Result<(), KeydumpError> {
        Err(KeydumpError::Io(std::io::Error::new(
            std::io::ErrorKind::WriteZero,
            "disk full",
        )))
    }

    fn finish(&mut self) -> Result<(), KeydumpError> {
        Ok(())
    }
}

#[test]
fn sink_failure_aborts_the_run() {
    let config = Config::new(Alphabet::new("01").unwrap(), 2, 1).unwrap();
    let mut sink = FailingSink;
    let err = generate(&config, &mut sink, &mut SilentObserver).unwrap_err();
    assert!(matches!(err, KeydumpError::Io(_)));
}
