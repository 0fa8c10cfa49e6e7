use std::path::PathBuf;

use image::RgbaImage;
use structopt::StructOpt;

use img_qnt::*;

#[derive(Debug, StructOpt)]
#[structopt(about = "Converts QNT format to various formats. Example: decode foo.qnt foo.png")]
struct Opt {
    /// Keeps the padded (even) dimensions instead of cropping to the nominal size.
    #[structopt(long)]
    padded: bool,

    #[structopt(parse(from_os_str))]
    path_in: PathBuf,

    #[structopt(parse(from_os_str))]
    path_out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let buf = std::fs::read(&opt.path_in)?;
    let qnt = qnt_decode(&buf)?;

    let img = if opt.padded {
        RgbaImage::from_vec(qnt.width(), qnt.height(), qnt.into_pixels())
    } else {
        let (width, height) = (qnt.header().width(), qnt.header().height());
        RgbaImage::from_vec(width, height, qnt.to_cropped())
    }
    .expect("buffer should contain `width * height` pixels");

    img.save(opt.path_out)?;

    Ok(())
}
