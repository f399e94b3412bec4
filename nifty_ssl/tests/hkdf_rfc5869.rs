use nifty_ssl::{hkdf, CryptoError, MAX_OUTPUT_LEN};
use ring::hkdf as ring_hkdf;
use std::thread;

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

#[test]
fn rfc5869_case1_basic() {
    let ikm = [0x0bu8; 22];
    let salt = unhex("000102030405060708090a0b0c");
    let info = unhex("f0f1f2f3f4f5f6f7f8f9");

    let okm = hkdf(&ikm, Some(&salt[..]), Some(&info[..]), 42).unwrap();
    assert_eq!(
        hex::encode(&okm),
        "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
    );
}

#[test]
fn rfc5869_case2_long_inputs() {
    let ikm: Vec<u8> = (0x00..=0x4f).collect();
    let salt: Vec<u8> = (0x60..=0xaf).collect();
    let info: Vec<u8> = (0xb0..=0xff).collect();

    let okm = hkdf(&ikm, Some(&salt[..]), Some(&info[..]), 82).unwrap();
    assert_eq!(
        hex::encode(&okm),
        "b11e398dc80327a1c8e7f78c596a49344f012eda2d4efad8a050cc4c19afa97c\
         59045a99cac7827271cb41c65e590e09da3275600c2f09b8367793a9aca3db71\
         cc30c58179ec3e87c14c01d5c1f3434f1d87"
    );
}

#[test]
fn rfc5869_case3_no_salt_no_info() {
    let ikm = [0x0bu8; 22];
    let expected = "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8";

    let okm = hkdf(&ikm, None, None, 42).unwrap();
    assert_eq!(hex::encode(&okm), expected);

    let zero_salt = [0u8; 32];
    assert_eq!(hkdf(&ikm, Some(&zero_salt[..]), None, 42).unwrap(), okm);
    assert_eq!(hkdf(&ikm, Some(&[][..]), Some(&[][..]), 42).unwrap(), okm);
}

#[test]
fn output_has_exactly_requested_length() {
    for &len in &[0usize, 1, 31, 32, 33, 63, 64, 65, 100, 1000, MAX_OUTPUT_LEN] {
        let okm = hkdf(b"input key", Some(&b"salt"[..]), Some(&b"info"[..]), len).unwrap();
        assert_eq!(okm.len(), len);
    }
}

#[test]
fn max_output_len_is_accepted_and_one_more_is_rejected() {
    assert_eq!(MAX_OUTPUT_LEN, 8160);
    assert!(hkdf(b"ikm", None, None, MAX_OUTPUT_LEN).is_ok());

    match hkdf(b"ikm", None, None, MAX_OUTPUT_LEN + 1) {
        Err(CryptoError::InvalidArgument(msg)) => assert!(msg.contains("8161")),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    assert!(hkdf(b"ikm", None, None, usize::MAX).is_err());
}

#[test]
fn shorter_output_is_prefix_of_longer() {
    let long = hkdf(b"ikm", Some(&b"salt"[..]), Some(&b"info"[..]), 200).unwrap();
    for &len in &[1usize, 32, 33, 150] {
        let short = hkdf(b"ikm", Some(&b"salt"[..]), Some(&b"info"[..]), len).unwrap();
        assert_eq!(&long[..len], &short[..]);
    }
}

#[test]
fn info_separates_domains() {
    let a = hkdf(b"ikm", None, Some(&b"client key"[..]), 32).unwrap();
    let b = hkdf(b"ikm", None, Some(&b"server key"[..]), 32).unwrap();
    assert_ne!(a, b);
}

#[test]
fn salt_and_ikm_roles_are_not_interchangeable() {
    let a = hkdf(b"alpha", Some(&b"beta"[..]), None, 32).unwrap();
    let b = hkdf(b"beta", Some(&b"alpha"[..]), None, 32).unwrap();
    assert_ne!(a, b);
}

#[test]
fn derivation_is_deterministic_across_threads() {
    let expected = hkdf(b"shared seed", Some(&b"salt"[..]), Some(&b"ticket"[..]), 48).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| hkdf(b"shared seed", Some(&b"salt"[..]), Some(&b"ticket"[..]), 48).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

struct OkmLen(usize);

impl ring_hkdf::KeyType for OkmLen {
    fn len(&self) -> usize {
        self.0
    }
}

fn ring_reference(ikm: &[u8], salt: &[u8], info: &[u8], len: usize) -> Vec<u8> {
    let prk = ring_hkdf::Salt::new(ring_hkdf::HKDF_SHA256, salt).extract(ikm);
    let info = [info];
    let okm = prk.expand(&info, OkmLen(len)).unwrap();
    let mut out = vec![0u8; len];
    okm.fill(&mut out).unwrap();
    out
}

#[test]
fn agrees_with_ring_hkdf() {
    let ikm = unhex("4a7d0c2f9e11b3");
    let salt = unhex("a1a2a3a4a5a6a7a8");
    let info = b"tls13 derived";

    for &len in &[1usize, 16, 32, 33, 64, 97, 255, 4096, MAX_OUTPUT_LEN] {
        assert_eq!(
            hkdf(&ikm, Some(&salt[..]), Some(&info[..]), len).unwrap(),
            ring_reference(&ikm, &salt, info, len),
            "len {}",
            len
        );
    }
}
