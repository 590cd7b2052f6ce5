//! Golden test vectors for payload encoding.
//!
//! Every expected payload below was checked against an independent
//! CRC-16/CCITT-FALSE implementation. The BCB sample is the one published
//! in the central bank's PIX initiation manual.

use pix_charge_core::{build_payload, crc16_ccitt, ChargeRequest};
use rust_decimal::Decimal;

/// A golden payload vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub payee_key: &'static str,
    pub payee_name: &'static str,
    pub payee_city: &'static str,
    /// Amount in centavos.
    pub amount_cents: Option<i64>,
    pub transaction_id: Option<&'static str>,
    /// Expected payload, CRC included.
    pub expected_payload: &'static str,
}

impl GoldenVector {
    /// The request this vector encodes.
    pub fn request(&self) -> ChargeRequest {
        ChargeRequest {
            payee_key: self.payee_key.to_string(),
            payee_name: self.payee_name.to_string(),
            payee_city: self.payee_city.to_string(),
            amount: self.amount_cents.map(|c| Decimal::new(c, 2)),
            transaction_id: self.transaction_id.map(str::to_string),
        }
    }
}

/// A raw CRC vector.
#[derive(Debug, Clone, Copy)]
pub struct CrcVector {
    pub name: &'static str,
    pub input: &'static [u8],
    pub expected: u16,
}

/// Published sample payload from the BCB PIX initiation manual (EVP key).
pub const BCB_SAMPLE_PAYLOAD: &str = "00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-426655440000\
                                      5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***63041D3D";

/// Get all CRC vectors.
pub fn crc_vectors() -> Vec<CrcVector> {
    vec![
        CrcVector {
            name: "catalogue check value",
            input: b"123456789",
            expected: 0x29B1,
        },
        CrcVector {
            name: "empty input",
            input: b"",
            expected: 0xFFFF,
        },
        CrcVector {
            name: "single byte",
            input: b"A",
            expected: 0xB915,
        },
        CrcVector {
            name: "BCB sample body",
            input: b"00020126580014br.gov.bcb.pix0136123e4567-e12b-12d1-a456-426655440000\
                     5204000053039865802BR5913Fulano de Tal6008BRASILIA62070503***6304",
            expected: 0x1D3D,
        },
    ]
}

/// Get all payload vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "minimal static charge",
            payee_key: "11144477735",
            payee_name: "João da Silva",
            payee_city: "São Paulo",
            amount_cents: None,
            transaction_id: None,
            expected_payload: "00020101021226330014br.gov.bcb.pix0111111444777355204000053039865802BR\
                               5913JOAO DA SILVA6009SAO PAULO6304A857",
        },
        GoldenVector {
            name: "amount and transaction id",
            payee_key: "11144477735",
            payee_name: "João da Silva",
            payee_city: "São Paulo",
            amount_cents: Some(12550),
            transaction_id: Some("ORC-202401010001"),
            expected_payload: "00020101021226330014br.gov.bcb.pix0111111444777355204000053039865406\
                               125.505802BR5913JOAO DA SILVA6009SAO PAULO62200516ORC-202401010001\
                               630408CA",
        },
        GoldenVector {
            name: "cnpj key with company name",
            payee_key: "12345678000195",
            payee_name: "Acme Comércio Ltda",
            payee_city: "Rio de Janeiro",
            amount_cents: Some(150000),
            transaction_id: Some("FAT0042"),
            expected_payload: "00020101021226360014br.gov.bcb.pix0114123456780001955204000053039865407\
                               1500.005802BR5918ACME COMERCIO LTDA6014RIO DE JANEIRO62110507FAT0042\
                               63046DBA",
        },
        GoldenVector {
            name: "email key open amount",
            payee_key: "financeiro@acme.com.br",
            payee_name: "acme",
            payee_city: "Curitiba",
            amount_cents: None,
            transaction_id: None,
            expected_payload: "00020101021226440014br.gov.bcb.pix0122financeiro@acme.com.br\
                               5204000053039865802BR5904ACME6008CURITIBA6304FD19",
        },
        GoldenVector {
            name: "phone key one centavo",
            payee_key: "+5511987654321",
            payee_name: "Maria Souza",
            payee_city: "Belo Horizonte",
            amount_cents: Some(1),
            transaction_id: None,
            expected_payload: "00020101021226360014br.gov.bcb.pix0114+55119876543215204000053039865404\
                               0.015802BR5911MARIA SOUZA6014BELO HORIZONTE6304D914",
        },
    ]
}

/// Encode every vector and report mismatches.
///
/// Returns `(name, matches, actual)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = build_payload(&v.request()).unwrap_or_else(|e| format!("error: {e}"));
            (v.name.to_string(), actual == v.expected_payload, actual)
        })
        .collect()
}

/// Check every CRC vector against [`crc16_ccitt`].
pub fn verify_crc_vectors() -> Vec<(String, bool, u16)> {
    crc_vectors()
        .iter()
        .map(|v| {
            let actual = crc16_ccitt(v.input);
            (v.name.to_string(), actual == v.expected, actual)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_charge_core::verify_payload;

    #[test]
    fn test_payload_vectors_match() {
        for (name, ok, actual) in verify_all_vectors() {
            assert!(ok, "vector '{name}' produced {actual}");
        }
    }

    #[test]
    fn test_crc_vectors_match() {
        for (name, ok, actual) in verify_crc_vectors() {
            assert!(ok, "crc vector '{name}' produced {actual:04X}");
        }
    }

    #[test]
    fn test_vectors_verify() {
        for vector in all_vectors() {
            assert!(
                verify_payload(vector.expected_payload).is_ok(),
                "vector '{}' does not verify",
                vector.name
            );
        }
        assert!(verify_payload(BCB_SAMPLE_PAYLOAD).is_ok());
    }
}
