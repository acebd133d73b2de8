//! tests/roundtrip_tests.rs
//! Encrypt → decrypt round-trips across the supported (cipher, mode) matrix

mod common;

use common::{supported_modes, ALGORITHMS, TEST_PASSWORD};
use polycrypt_rs::{decrypt, decrypt_bytes, encrypt, encrypt_bytes};

#[test]
fn roundtrip_all_supported_pairs() {
    let cases = [
        ("HELLO WORLD", "ascii"),
        ("", "empty plaintext"),
        ("héllo wörld — パスワード", "unicode"),
        ("\u{FEFF}starts with a BOM", "leading BOM kept verbatim"),
        (
            "0123456789abcdef0123456789abcdef0123456789abcdef!",
            "multi-block",
        ),
    ];

    for &algorithm in ALGORITHMS {
        for mode in supported_modes(algorithm) {
            for (plaintext, desc) in cases {
                let encrypted = encrypt(plaintext, TEST_PASSWORD, algorithm, mode)
                    .unwrap_or_else(|e| panic!("{algorithm}/{mode} encrypt failed for {desc}: {e}"));
                let decrypted = decrypt(&encrypted, TEST_PASSWORD, algorithm, mode)
                    .unwrap_or_else(|e| panic!("{algorithm}/{mode} decrypt failed for {desc}: {e}"));
                assert_eq!(decrypted, plaintext, "{algorithm}/{mode}: {desc} mismatch");
            }
        }
    }
}

#[test]
fn roundtrip_raw_bytes() {
    let payload: Vec<u8> = (0u8..=255).collect();

    for &algorithm in ALGORITHMS {
        for mode in supported_modes(algorithm) {
            let encrypted = encrypt_bytes(&payload, TEST_PASSWORD, algorithm, mode).unwrap();
            let decrypted = decrypt_bytes(&encrypted, TEST_PASSWORD, algorithm, mode).unwrap();
            assert_eq!(decrypted, payload, "{algorithm}/{mode}: byte payload mismatch");
        }
    }
}

#[test]
fn roundtrip_password_edge_lengths() {
    // Empty (key is all zeros), single byte, exactly max key length, and
    // longer than max key length (truncated).
    let passwords: &[&[u8]] = &[
        b"",
        b"x",
        &[0x42u8; 56],
        b"this password is considerably longer than fifty-six bytes, the blowfish maximum",
    ];

    for &algorithm in ALGORITHMS {
        for mode in supported_modes(algorithm) {
            for &password in passwords {
                let encrypted = encrypt("edge case", password, algorithm, mode).unwrap();
                let decrypted = decrypt(&encrypted, password, algorithm, mode).unwrap();
                assert_eq!(
                    decrypted, "edge case",
                    "{algorithm}/{mode}: password of {} bytes",
                    password.len()
                );
            }
        }
    }
}

#[test]
fn truncation_ignores_password_tail_beyond_key_length() {
    // Only the first key_len bytes of the password matter.
    for &algorithm in ALGORITHMS {
        let max = algorithm.key_len();
        let long = vec![0x61u8; max + 10];
        let exact = vec![0x61u8; max];

        let a = encrypt("tail test", &long, algorithm, polycrypt_rs::CipherMode::Cbc).unwrap();
        let b = encrypt("tail test", &exact, algorithm, polycrypt_rs::CipherMode::Cbc).unwrap();
        assert_eq!(a, b, "{algorithm}: truncated tail changed the ciphertext");
    }
}

#[test]
fn stream_modes_preserve_length() {
    use polycrypt_rs::CipherMode;

    for &algorithm in ALGORITHMS {
        for mode in [CipherMode::Cfb, CipherMode::Cfb8, CipherMode::Ofb] {
            let encrypted = encrypt("exactly 19 bytes ok", TEST_PASSWORD, algorithm, mode).unwrap();
            assert_eq!(
                encrypted.len(),
                19,
                "{algorithm}/{mode}: stream mode changed the length"
            );
        }
    }
}
