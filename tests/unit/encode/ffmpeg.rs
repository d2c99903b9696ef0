use super::*;

fn args_of(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn command_line_matches_image_sequence_contract() {
    let asm = FfmpegAssembler::default();
    let cmd = asm.command(
        Path::new("/tmp/frames/%05d.png"),
        Fps::new(60).unwrap(),
        Path::new("videos/video1.mp4"),
    );
    assert_eq!(cmd.get_program(), "ffmpeg");
    assert_eq!(
        args_of(&cmd),
        vec![
            "-loglevel",
            "error",
            "-f",
            "image2",
            "-r",
            "60",
            "-i",
            "/tmp/frames/%05d.png",
            "-vcodec",
            "mpeg4",
            "-y",
            "videos/video1.mp4",
        ]
    );
}

#[test]
fn command_line_honors_program_codec_and_overwrite() {
    let asm = FfmpegAssembler::new(FfmpegOpts {
        program: OsString::from("/opt/ffmpeg/bin/ffmpeg"),
        codec: "libx264".to_string(),
        overwrite: false,
    });
    let cmd = asm.command(
        Path::new("f/%05d.png"),
        Fps::new(24).unwrap(),
        Path::new("out.mp4"),
    );
    assert_eq!(cmd.get_program(), "/opt/ffmpeg/bin/ffmpeg");
    let args = args_of(&cmd);
    assert!(args.windows(2).any(|w| w == ["-r", "24"]));
    assert!(args.windows(2).any(|w| w == ["-vcodec", "libx264"]));
    assert!(args.contains(&"-n".to_string()));
    assert!(!args.contains(&"-y".to_string()));
}

#[test]
fn next_output_fills_lowest_gap() {
    let tmp = tempfile::tempdir().unwrap();
    let videos = tmp.path().join("videos");
    std::fs::create_dir_all(&videos).unwrap();
    std::fs::write(videos.join("video1.mp4"), b"").unwrap();
    std::fs::write(videos.join("video3.mp4"), b"").unwrap();

    let next = next_available_output(&videos).unwrap();
    assert_eq!(next, videos.join("video2.mp4"));
}

#[test]
fn next_output_creates_missing_dir_and_starts_at_one() {
    let tmp = tempfile::tempdir().unwrap();
    let videos = tmp.path().join("nested").join("videos");
    let next = next_available_output(&videos).unwrap();
    assert!(videos.is_dir());
    assert_eq!(next, videos.join("video1.mp4"));
}

#[test]
fn missing_encoder_is_an_encoding_error() {
    let asm = FfmpegAssembler::new(FfmpegOpts {
        program: OsString::from("dlavid-no-such-encoder"),
        ..FfmpegOpts::default()
    });
    let tmp = tempfile::tempdir().unwrap();
    let err = asm
        .assemble(
            &tmp.path().join("%05d.png"),
            Fps::new(60).unwrap(),
            &tmp.path().join("video1.mp4"),
        )
        .unwrap_err();
    assert!(matches!(err, DlavidError::Encoding(_)));
    assert!(!is_encoder_available("dlavid-no-such-encoder"));
}

#[cfg(unix)]
#[test]
fn failing_encoder_exit_is_an_encoding_error() {
    let asm = FfmpegAssembler::new(FfmpegOpts {
        program: OsString::from("false"),
        ..FfmpegOpts::default()
    });
    let tmp = tempfile::tempdir().unwrap();
    let err = asm
        .assemble(
            &tmp.path().join("%05d.png"),
            Fps::new(60).unwrap(),
            &tmp.path().join("video1.mp4"),
        )
        .unwrap_err();
    assert!(err.to_string().contains("exited with status"));
}
