use rand::Rng;
use rtsi::{fft, signal, spectrum, utils, window};

#[test]
fn window_lengths() {
    assert_eq!(window::hann(0).len(), 0);
    assert_eq!(window::hann(8).len(), 8);
    assert_eq!(window::hann_symmetric(8).len(), 8);
    assert_eq!(
        window::asymmetric_window(&window::hann_symmetric(16), 4)
            .unwrap()
            .len(),
        16
    );
}

#[test]
fn rfft_irfft_roundtrip() {
    let mut rng = rand::thread_rng();
    let y: Vec<f32> = (0..512).map(|_| rng.gen_range(-1.0f32..1.0f32)).collect();

    let spectrum = fft::rfft(&y).unwrap();
    assert_eq!(spectrum.len(), 257);
    let y_rec = fft::irfft(&spectrum, y.len()).unwrap();

    let mse = utils::mse(&y, &y_rec);
    assert!(mse < 1e-10, "mse too high: {mse}");
}

#[test]
fn uncentered_stft_shape() {
    let y = signal::tone(440.0, 16000, 0.1, 1.0);
    let config = spectrum::StftConfig::uncentered(512, 128);
    let s = spectrum::stft(&y, &config).unwrap();
    assert_eq!(s.shape(), &[257, utils::frame_count(y.len(), 512, 128)]);
}

#[test]
fn tone_peaks_at_its_bin() {
    // 1 kHz at 16 kHz with 512 points lands on bin 32
    let y = signal::tone(1000.0, 16000, 0.1, 1.0);
    let config = spectrum::StftConfig::uncentered(512, 128);
    let mag = spectrum::magnitude(&spectrum::stft(&y, &config).unwrap());
    let column = mag.column(0);
    let peak = column
        .iter()
        .enumerate()
        .fold((0, 0.0f32), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0;
    assert_eq!(peak, 32);
}

#[test]
fn padding_helpers() {
    let audio = vec![1.0f32; 1000];
    assert_eq!(utils::pad_for_hop_length(&audio, 256).unwrap().len(), 1024);
    assert_eq!(
        utils::pad_for_shape_preserving_inverse(&audio, 1024, 256)
            .unwrap()
            .len(),
        1024 + 768
    );
}
