use geohash9::{EncoderConfig, GeoHashEncoder, GeoHashError};

fn main() -> Result<(), GeoHashError> {
    env_logger::init();

    // Optional JSON config path, e.g. {"hashLength": 5, "latBisections": 12, "lonBisections": 13}
    let config = match std::env::args().nth(1) {
        Some(path) => EncoderConfig::from_json_file(path)?,
        None => EncoderConfig::default(),
    };
    let encoder = GeoHashEncoder::from_config(config)?;

    let lat = 40.058918;
    let lon = 116.312621;

    let hash = encoder.encode(lat, lon)?;
    println!("{}", hash);

    let hood = encoder.encode_neighborhood(lat, lon)?;
    println!("{}", hood.to_json()?);

    Ok(())
}
