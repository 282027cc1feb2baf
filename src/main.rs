use region_features::image::{BinaryImage, Sentinels};
use region_features::{FeatureError, RegionAnalyzer};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FeatureError> {
    // Demo stub: two equal squares and one bar on a blank raster
    let w = 64usize;
    let h = 48usize;
    let mut raster = vec![0u8; w * h];
    for (x0, y0, bw, bh) in [(4, 4, 8, 8), (30, 6, 8, 8), (10, 30, 30, 4)] {
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                raster[y * w + x] = 255;
            }
        }
    }
    let image = BinaryImage::new(w, h, &raster, Sentinels::WHITE_ON_BLACK)?;

    let mut analyzer = RegionAnalyzer::new();
    let report = analyzer.rebuild(&image)?;
    println!(
        "regions={} latency_ms={:.3}",
        report.region_count, report.timing.total_ms
    );
    for id in analyzer.region_ids() {
        print!("{}", analyzer.summary(id)?);
        println!("Similar: {:?}", analyzer.find_similar(id)?);
    }
    Ok(())
}
