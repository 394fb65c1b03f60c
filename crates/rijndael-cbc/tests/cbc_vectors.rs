use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_cbc::{CbcError, CipherError, Pkcs7Padding, RijndaelCbc, ZeroPadding};

const SP800_38A_IV: &str = "000102030405060708090a0b0c0d0e0f";
const SP800_38A_PLAIN: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710"
);

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex")
}

#[test]
fn sp800_38a_cbc_aes128() {
    // Block-aligned input with zero padding adds nothing, so the raw vector applies.
    let cbc = RijndaelCbc::new(
        &unhex("2b7e151628aed2a6abf7158809cf4f3c"),
        &unhex(SP800_38A_IV),
        ZeroPadding::new(16),
        16,
    )
    .expect("valid parameters");
    let ct = cbc.encrypt(&unhex(SP800_38A_PLAIN)).expect("encrypt");
    assert_eq!(
        hex::encode(&ct),
        concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7"
        )
    );
    assert_eq!(hex::encode(cbc.decrypt(&ct).expect("decrypt")), SP800_38A_PLAIN);
}

#[test]
fn sp800_38a_cbc_aes256() {
    let cbc = RijndaelCbc::new(
        &unhex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
        &unhex(SP800_38A_IV),
        ZeroPadding::new(16),
        16,
    )
    .expect("valid parameters");
    let ct = cbc.encrypt(&unhex(SP800_38A_PLAIN)).expect("encrypt");
    assert_eq!(
        hex::encode(&ct),
        concat!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b"
        )
    );
}

#[test]
fn round_trip_every_size_and_length() {
    let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
    for block_size in [16, 24, 32] {
        for key_size in [16, 24, 32] {
            let mut key = vec![0u8; key_size];
            let mut iv = vec![0u8; block_size];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut iv);
            let cbc = RijndaelCbc::new(&key, &iv, Pkcs7Padding::new(block_size), block_size)
                .expect("valid parameters");
            for len in [0usize, 1, block_size - 1, block_size, block_size + 1, 200] {
                let mut plaintext = vec![0u8; len];
                rng.fill_bytes(&mut plaintext);
                let ct = cbc.encrypt(&plaintext).expect("encrypt");
                assert_eq!(ct.len() % block_size, 0);
                assert!(ct.len() > len);
                assert_eq!(cbc.decrypt(&ct).expect("decrypt"), plaintext);
            }
        }
    }
}

#[test]
fn wide_block_pkcs7_scenario() {
    let mut rng = ChaCha20Rng::from_seed([32u8; 32]);
    let mut key = [0u8; 32];
    let mut iv = [0u8; 32];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    let cbc = RijndaelCbc::new(&key, &iv, Pkcs7Padding::new(32), 32).expect("valid parameters");

    let len = rng.gen_range(1..4096);
    let mut plaintext = vec![0u8; len];
    rng.fill_bytes(&mut plaintext);
    let ct = cbc.encrypt(&plaintext).expect("encrypt");
    assert_eq!(ct.len() % 32, 0);
    assert_eq!(cbc.decrypt(&ct).expect("decrypt"), plaintext);
}

#[test]
fn encryption_is_deterministic() {
    let cbc = RijndaelCbc::new(&[1u8; 24], &[2u8; 32], Pkcs7Padding::new(32), 32)
        .expect("valid parameters");
    let msg = b"the quick brown fox jumps over the lazy dog";
    assert_eq!(cbc.encrypt(msg).unwrap(), cbc.encrypt(msg).unwrap());
}

#[test]
fn corrupted_block_only_affects_itself_and_next() {
    let block_size = 24;
    let cbc = RijndaelCbc::new(&[4u8; 32], &[8u8; 24], ZeroPadding::new(block_size), block_size)
        .expect("valid parameters");
    let plaintext: Vec<u8> = (1..=(block_size * 5) as u8).collect();
    let mut ct = cbc.encrypt(&plaintext).expect("encrypt");
    assert_eq!(ct.len(), plaintext.len());

    let corrupted = 2;
    ct[corrupted * block_size + 3] ^= 0x80;
    let decrypted = cbc.decrypt(&ct).expect("zero padding accepts any aligned input");

    for (idx, (got, want)) in decrypted
        .chunks(block_size)
        .zip(plaintext.chunks(block_size))
        .enumerate()
    {
        if idx == corrupted || idx == corrupted + 1 {
            assert_ne!(got, want, "block {idx} should be garbled");
        } else {
            assert_eq!(got, want, "block {idx} should be intact");
        }
    }
    // Only the flipped bit carries into the following block.
    let next = corrupted + 1;
    let diff: Vec<u8> = decrypted[next * block_size..(next + 1) * block_size]
        .iter()
        .zip(&plaintext[next * block_size..(next + 1) * block_size])
        .map(|(a, b)| a ^ b)
        .collect();
    let mut expected = vec![0u8; block_size];
    expected[3] = 0x80;
    assert_eq!(diff, expected);
}

#[test]
fn boundary_rejections() {
    assert_eq!(
        RijndaelCbc::new(&[0u8; 20], &[0u8; 16], Pkcs7Padding::new(16), 16).unwrap_err(),
        CbcError::Cipher(CipherError::InvalidKeySize(20))
    );
    assert_eq!(
        RijndaelCbc::new(&[0u8; 16], &[0u8; 12], Pkcs7Padding::new(12), 12).unwrap_err(),
        CbcError::Cipher(CipherError::InvalidBlockSize(12))
    );

    let cbc = RijndaelCbc::new(&[0u8; 16], &[0u8; 32], Pkcs7Padding::new(32), 32)
        .expect("valid parameters");
    let ct = cbc.encrypt(b"payload").expect("encrypt");
    assert_eq!(
        cbc.decrypt(&ct[..ct.len() - 1]),
        Err(CbcError::UnalignedCiphertext {
            len: 31,
            block_size: 32
        })
    );
    assert!(cbc.cipher().encrypt(&[0u8; 16]).is_err());
}

#[test]
fn tampered_padding_is_reported() {
    let cbc = RijndaelCbc::new(&[6u8; 16], &[7u8; 16], Pkcs7Padding::new(16), 16)
        .expect("valid parameters");
    let ct = cbc.encrypt(b"short").expect("encrypt");
    // Decrypting with a different IV flips the padding bytes of the only block.
    let other = RijndaelCbc::new(&[6u8; 16], &[0xffu8; 16], Pkcs7Padding::new(16), 16)
        .expect("valid parameters");
    assert!(matches!(other.decrypt(&ct), Err(CbcError::Padding(_))));
}
