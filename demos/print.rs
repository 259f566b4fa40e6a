use screw_fk::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let chain = ScrewChainBuilder::new()
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 3.0))
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, -2.0, 0.0))
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(5.0, 0.0, 2.0))
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0))
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(5.0, 0.0, 2.0))
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, -1.0))
        .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, -1.0))
        .finalize();
    println!("{chain}");

    let frames = chain.compute_frames()?;
    for (i, frame) in frames.iter().enumerate() {
        println!("frame {i}: {frame}");
    }

    // half of each motion
    let frames = chain.compute_frames_at(&[0.5; 7])?;
    println!("end at half motion: {}", frames.end_effector().translation());
    Ok(())
}
