use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(30, 1).is_ok());
}

#[test]
fn fps_frame_math() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert!((fps.frames_to_secs(120) - 2.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_ceil(2.0), 120);
    assert_eq!(fps.secs_to_frames_ceil(2.001), 121);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
}

#[test]
fn viewport_validation() {
    assert!(Viewport::new(1280.0, 720.0).validate().is_ok());
    assert!(Viewport::new(0.0, 720.0).validate().is_err());
    assert!(Viewport::new(f64::NAN, 720.0).validate().is_err());
    assert_eq!(Viewport::new(10.2, 5.0).pixel_size(), (11, 5));
}
