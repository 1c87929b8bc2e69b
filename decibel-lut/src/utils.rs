/// The exact curve the lookup table samples. Only ever evaluated offline.
#[allow(non_snake_case)]
pub fn dB_to_gain(dB: f64) -> f64 {
    let ten: f64 = 10.0;
    ten.powf(dB / 20.0)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn known_gains() {
        assert_eq!(dB_to_gain(0.0), 1.0);
        assert!((dB_to_gain(20.0) - 10.0).abs() < 1e-12);
        assert!((dB_to_gain(-6.0) - 0.501_187_233_627_272_2).abs() < 1e-12);
        assert!((dB_to_gain(-96.0) - 1.584_893_192_461_113_5e-5).abs() < 1e-17);
    }
}
