use ndarray::{Array2, s};
use rtsi::inversion::Padding;
use rtsi::{Rtsi, RtsiConfig, signal, utils};

fn engine(win: usize, hop: usize, seed: u64) -> Rtsi {
    Rtsi::new(RtsiConfig::new(win, hop).with_seed(seed)).unwrap()
}

/// Half-overlap engines only leave the seed level with the raw-state fallback.
fn engine_with_fallback(win: usize, hop: usize, seed: u64) -> Rtsi {
    let config = RtsiConfig::new(win, hop)
        .with_seed(seed)
        .with_raw_state_fallback(win == 2 * hop);
    Rtsi::new(config).unwrap()
}

fn block_rms(hops: &[Vec<f32>]) -> f32 {
    hops.iter().map(|h| utils::rms(h)).sum::<f32>() / hops.len() as f32
}

/// Analyze, invert, re-analyze; returns (warm-up, steady-state) spectral
/// convergence and the output/input RMS ratio over the middle half.
fn roundtrip(audio: &[f32], win: usize, hop: usize, seed: u64) -> (f32, f32, f32) {
    let mut rtsi = engine(win, hop, seed);
    let target = rtsi.audio_to_spect(audio, Padding::ShapePreserving).unwrap();
    let restored = rtsi.spect_to_audio(&target).unwrap();
    assert_eq!(restored.len(), audio.len());

    let estimate = rtsi
        .audio_to_spect(&restored, Padding::ShapePreserving)
        .unwrap();
    assert_eq!(estimate.shape(), target.shape());

    let k = win / hop;
    let n = target.ncols();
    let early = utils::spectral_convergence(
        &target.slice(s![.., ..k]).to_owned(),
        &estimate.slice(s![.., ..k]).to_owned(),
    )
    .unwrap();
    let late = utils::spectral_convergence(
        &target.slice(s![.., k..n - k]).to_owned(),
        &estimate.slice(s![.., k..n - k]).to_owned(),
    )
    .unwrap();

    let mid = audio.len() / 4..3 * audio.len() / 4;
    let gain = utils::rms(&restored[mid.clone()]) / utils::rms(&audio[mid]);
    (early, late, gain)
}

#[test]
fn tone_roundtrip_converges_after_warmup() {
    let audio = signal::tone(300.0, 8000, 0.128, 0.5);
    assert_eq!(audio.len(), 1024);
    for seed in 0..3 {
        let (early, late, gain) = roundtrip(&audio, 64, 16, seed);
        assert!(late < 0.2, "steady-state convergence {late}");
        assert!(late <= early, "late {late} > early {early}");
        assert!((0.9..1.1).contains(&gain), "gain {gain}");
    }
}

#[test]
fn chirp_roundtrip_converges_after_warmup() {
    let audio = signal::chirp(200.0, 2000.0, 8000, 0.128);
    let (early, late, gain) = roundtrip(&audio, 64, 16, 7);
    assert!(late < 0.2, "steady-state convergence {late}");
    assert!(late <= early, "late {late} > early {early}");
    assert!((0.9..1.1).contains(&gain), "gain {gain}");
}

#[test]
fn constant_frames_reach_bounded_steady_state() {
    for (win, hop) in [(16, 4), (32, 8), (8, 4)] {
        let mut rtsi = engine_with_fallback(win, hop, 3);
        let frame = vec![1.0f32; win / 2 + 1];
        let hops: Vec<Vec<f32>> = (0..96).map(|_| rtsi.process(&frame).unwrap()).collect();

        assert!(hops.iter().flatten().all(|v| v.is_finite()));
        assert!(hops.iter().flatten().all(|v| v.abs() < 10.0));

        let warm = win / hop;
        let first = block_rms(&hops[warm..48]);
        let second = block_rms(&hops[48..]);
        assert!(first > 1e-3, "{win}/{hop}: decayed to {first}");
        let ratio = second / first;
        assert!(
            (0.5..2.0).contains(&ratio),
            "{win}/{hop}: rms drifted by {ratio}"
        );
    }
}

#[test]
fn silence_then_signal_recovers() {
    for (win, hop) in [(16, 4), (32, 8), (8, 4)] {
        let mut rtsi = engine_with_fallback(win, hop, 1);
        let n_freq = win / 2 + 1;
        let ones = vec![1.0f32; n_freq];
        let zeros = vec![0.0f32; n_freq];

        for _ in 0..3 {
            rtsi.process(&ones).unwrap();
        }
        for _ in 0..6 {
            rtsi.process(&zeros).unwrap();
        }
        let resumed: Vec<Vec<f32>> = (0..8).map(|_| rtsi.process(&ones).unwrap()).collect();
        assert!(rtsi.reseed_count() >= 1);
        assert!(
            resumed.iter().any(|h| utils::rms(h) > 1e-3),
            "{win}/{hop}: output stayed silent"
        );
    }
}

#[test]
fn half_overlap_without_fallback_is_quiet_but_finite() {
    let mut rtsi = engine(8, 4, 42);
    let hops: Vec<Vec<f32>> = (0..3).map(|_| rtsi.process(&[1.0; 5]).unwrap()).collect();
    assert_eq!(hops.iter().map(Vec::len).sum::<usize>(), 12);
    assert!(hops.iter().flatten().all(|v| v.is_finite()));
    assert!((utils::rms(&hops[2]) - utils::rms(&hops[1])).abs() < 1e-3);
    assert!(hops.iter().flatten().any(|&v| v != 0.0));
}

#[test]
fn single_zero_frame_does_not_silence_stream() {
    let mut rtsi = engine(16, 4, 9);
    let zeros = vec![0.0f32; 9];
    let ones = vec![1.0f32; 9];
    rtsi.process(&zeros).unwrap();
    let hops: Vec<Vec<f32>> = (0..8).map(|_| rtsi.process(&ones).unwrap()).collect();
    assert!(hops.iter().flatten().any(|&v| v != 0.0));
    assert!(hops.iter().skip(4).any(|h| utils::rms(h) > 1e-3));
}

#[test]
fn fixed_seed_is_bit_exact() {
    let audio = signal::chirp(100.0, 3000.0, 8000, 0.1);
    let config = RtsiConfig::new(128, 32).with_seed(1234);
    let spect = rtsi::inversion::audio_to_spect(&audio, &config, Padding::HopLength).unwrap();

    let a = Rtsi::new(config.clone()).unwrap().spect_to_audio(&spect).unwrap();
    let b = Rtsi::new(config).unwrap().spect_to_audio(&spect).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_share_steady_state_level() {
    let frame = vec![1.0f32; 9];
    let levels: Vec<f32> = (0..4)
        .map(|seed| {
            let mut rtsi = engine(16, 4, seed);
            let hops: Vec<Vec<f32>> = (0..128).map(|_| rtsi.process(&frame).unwrap()).collect();
            block_rms(&hops[32..])
        })
        .collect();
    let lo = levels.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = levels.iter().copied().fold(0.0f32, f32::max);
    assert!(hi / lo < 1.25, "levels {levels:?}");
}

#[test]
fn independent_streams_run_on_separate_threads() {
    let spect = Array2::from_shape_fn((33, 40), |(f, t)| 1.0 + ((f * 7 + t * 3) % 11) as f32 * 0.1);
    let reference = engine(64, 16, 5).spect_to_audio(&spect).unwrap();

    let outputs: Vec<Vec<f32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let spect = &spect;
                scope.spawn(move || engine(64, 16, 5).spect_to_audio(spect).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for out in outputs {
        assert_eq!(out, reference);
    }
}

#[test]
fn reset_starts_a_fresh_stream() {
    let spect = Array2::from_elem((9, 12), 0.5f32);
    let mut rtsi = engine(16, 4, 77);
    let first = rtsi.spect_to_audio(&spect).unwrap();
    rtsi.reset();
    let second = rtsi.spect_to_audio(&spect).unwrap();
    assert_eq!(first, second);
    assert_eq!(rtsi.frames_processed(), 12);
}
