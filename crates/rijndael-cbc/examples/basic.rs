//! Encrypts a message with 256-bit blocks in CBC mode and checks the AES-128 answer.

use rijndael_cbc::{Pkcs7Padding, Rijndael, RijndaelCbc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = [0x2bu8; 32];
    let iv = [0x7eu8; 32];
    let cbc = RijndaelCbc::new(&key, &iv, Pkcs7Padding::new(32), 32)?;

    let message = b"Rijndael with a 256-bit block and a 256-bit key";
    let ciphertext = cbc.encrypt(message)?;
    let decrypted = cbc.decrypt(&ciphertext)?;
    assert_eq!(decrypted, message);
    println!("ciphertext ({} bytes): {:02x?}", ciphertext.len(), ciphertext);

    // 16-byte blocks with a 16-byte key are plain AES-128.
    let aes = Rijndael::aes(&[0u8; 16])?;
    let block = aes.encrypt(&[0u8; 16])?;
    assert_eq!(
        block,
        [
            0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34,
            0x2b, 0x2e
        ]
    );

    println!("example succeeded; AES-128 known answer matches");
    Ok(())
}
