use argh::FromArgs;
use std::path::PathBuf;

use itc::elastix::ElastixTransform;

#[derive(FromArgs)]
/// Load an elastix transform file, flip its CompressResultImage flag and save it again
struct Args {
    /// path to the TransformParameters.txt file
    #[argh(option, short = 'i')]
    input_path: PathBuf,

    /// path of the modified file
    #[argh(option, short = 'o')]
    output_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let transform = ElastixTransform::load(&args.input_path)?;

    println!("Output the elastix file as a String");
    println!("{transform}");

    let temp_path = transform.to_temp_file()?;
    println!(
        "The elastix transform file is saved in the temporary directory: {}",
        temp_path.display()
    );

    let compress = transform.compress_result_image()?;
    let modified = transform.with_bool(ElastixTransform::COMPRESS_RESULT_IMAGE, !compress)?;

    modified.save(&args.output_path)?;
    println!(
        "Saved with CompressResultImage={} to {}",
        !compress,
        args.output_path.display()
    );

    Ok(())
}
