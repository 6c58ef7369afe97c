use argh::FromArgs;
use serde::Serialize;
use std::path::PathBuf;

use itc::conversion::convert::{affine2d, affine3d, euler3d};
use itc::conversion::VoxelSpacing3D;
use itc::elastix::{ElastixParameters, ElastixTransform};

#[derive(FromArgs)]
/// Convert an elastix transform parameter file into an affine matrix
struct Args {
    /// path to the TransformParameters.txt file
    #[argh(option, short = 'i')]
    input_path: PathBuf,

    /// voxel spacing of the target image in micrometers as x,y,z, defaults to the file Spacing
    #[argh(option, from_str_fn(parse_spacing))]
    voxel_spacing_um: Option<[f64; 3]>,

    /// express 3D affine transforms in voxels instead of millimeters
    #[argh(switch)]
    voxels: bool,

    /// print the result as json
    #[argh(switch)]
    json: bool,
}

#[derive(Serialize)]
struct Conversion {
    model: &'static str,
    units: &'static str,
    matrix: Vec<Vec<f64>>,
}

fn parse_spacing(value: &str) -> Result<[f64; 3], String> {
    let values = value
        .split(',')
        .map(|s| s.trim().parse::<f64>().map_err(|e| format!("{s}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected 3 values, got {}", v.len()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let transform = ElastixTransform::load(&args.input_path)?;

    // only read when a voxel conversion is needed
    let spacing = || -> Result<VoxelSpacing3D, Box<dyn std::error::Error>> {
        match args.voxel_spacing_um {
            Some(um) => Ok(VoxelSpacing3D::try_new(um)?),
            None => Ok(transform.voxel_spacing_um()?),
        }
    };

    let parameters = ElastixParameters::try_from(&transform)?;
    if args.voxels {
        if let Some(reason) = ignored_voxels_switch(&parameters) {
            log::warn!("--voxels has no effect: {reason}");
        }
    }

    let conversion = match parameters {
        ElastixParameters::Affine2D(params) => Conversion {
            model: "affine2d",
            units: "mm",
            matrix: to_rows(affine2d::convert(&params).to_row_major()),
        },
        ElastixParameters::Affine3D(params) if args.voxels => Conversion {
            model: "affine3d",
            units: "voxel",
            matrix: to_rows(affine3d::convert_to_voxels(&params, &spacing()?).to_row_major()),
        },
        ElastixParameters::Affine3D(params) => Conversion {
            model: "affine3d",
            units: "mm",
            matrix: to_rows(affine3d::convert(&params).to_row_major()),
        },
        ElastixParameters::Euler3D(params) => Conversion {
            model: "euler3d",
            units: "voxel",
            matrix: to_rows(euler3d::convert(&params, &spacing()?).to_row_major()),
        },
    };

    log::info!(
        "converted {} ({}) from {}",
        conversion.model,
        conversion.units,
        args.input_path.display()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{} [{}]", conversion.model, conversion.units);
        for row in &conversion.matrix {
            let row = row.iter().map(|v| format!("{v:>12.6}")).collect::<Vec<_>>();
            println!("{}", row.join(" "));
        }
    }

    Ok(())
}

/// Returns why `--voxels` does not change the output for this model, if it doesn't.
fn ignored_voxels_switch(parameters: &ElastixParameters) -> Option<&'static str> {
    match parameters {
        ElastixParameters::Affine2D(_) => Some("2D affine transforms are printed in millimeters"),
        ElastixParameters::Affine3D(_) => None,
        ElastixParameters::Euler3D(_) => Some("Euler transforms are always printed in voxels"),
    }
}

fn to_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| row.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itc::conversion::{AffineParameters2D, AffineParameters3D, EulerParameters3D};

    #[test]
    fn voxels_switch_only_applies_to_affine3d() {
        let affine2d = ElastixParameters::Affine2D(AffineParameters2D::new(
            [[1.0, 0.0], [0.0, 1.0]],
            [0.0; 2],
            [0.0; 2],
        ));
        let affine3d = ElastixParameters::Affine3D(AffineParameters3D::new(
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            [0.0; 3],
            [0.0; 3],
        ));
        let euler3d = ElastixParameters::Euler3D(EulerParameters3D::new([0.0; 3], [0.0; 3], [0.0; 3]));

        assert!(ignored_voxels_switch(&affine2d).is_some());
        assert!(ignored_voxels_switch(&affine3d).is_none());
        assert!(ignored_voxels_switch(&euler3d).is_some());
    }
}
