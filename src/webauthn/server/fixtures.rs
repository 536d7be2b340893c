//! Captured and generated credentials used by the verifier tests.
//!
//! Generated certificates are valid from 2020 to 2040 and use `example.com` / `https://example.com`.

/// Yubico security key, fido-u2f, rp `127.0.0.1`, origin `http://127.0.0.1:8080`, all zero challenge.
pub const U2F_LOCALHOST_REGISTRATION: &str = r#"{
    "id": "0xYE4bQ_HZM51-XYwp7WHJu8RfeA2Oz3_9HnNIZAKqRTz9gsUlF3QO7EqcJ0pgLSwDcq6cL1_aQpTtKLeGu6Ig",
    "rawId": "0xYE4bQ_HZM51-XYwp7WHJu8RfeA2Oz3_9HnNIZAKqRTz9gsUlF3QO7EqcJ0pgLSwDcq6cL1_aQpTtKLeGu6Ig",
    "response": {
        "attestationObject": "o2NmbXRoZmlkby11MmZnYXR0U3RtdKJjc2lnWEcwRQIhALjRb43YFcbJ3V9WiYPpIrZkhgzAM6KTR8KIjwCXejBCAiAO5Lvp1VW4dYBhBDv7HZIrxZb1SwKKYOLfFRXykRxMqGN4NWOBWQLBMIICvTCCAaWgAwIBAgIEGKxGwDANBgkqhkiG9w0BAQsFADAuMSwwKgYDVQQDEyNZdWJpY28gVTJGIFJvb3QgQ0EgU2VyaWFsIDQ1NzIwMDYzMTAgFw0xNDA4MDEwMDAwMDBaGA8yMDUwMDkwNDAwMDAwMFowbjELMAkGA1UEBhMCU0UxEjAQBgNVBAoMCVl1YmljbyBBQjEiMCAGA1UECwwZQXV0aGVudGljYXRvciBBdHRlc3RhdGlvbjEnMCUGA1UEAwweWXViaWNvIFUyRiBFRSBTZXJpYWwgNDEzOTQzNDg4MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEeeo7LHxJcBBiIwzSP-tg5SkxcdSD8QC-hZ1rD4OXAwG1Rs3Ubs_K4-PzD4Hp7WK9Jo1MHr03s7y-kqjCrutOOqNsMGowIgYJKwYBBAGCxAoCBBUxLjMuNi4xLjQuMS40MTQ4Mi4xLjcwEwYLKwYBBAGC5RwCAQEEBAMCBSAwIQYLKwYBBAGC5RwBAQQEEgQQy2lIHo_3QDmT7AonKaFUqDAMBgNVHRMBAf8EAjAAMA0GCSqGSIb3DQEBCwUAA4IBAQCXnQOX2GD4LuFdMRx5brr7Ivqn4ITZurTGG7tX8-a0wYpIN7hcPE7b5IND9Nal2bHO2orh_tSRKSFzBY5e4cvda9rAdVfGoOjTaCW6FZ5_ta2M2vgEhoz5Do8fiuoXwBa1XCp61JfIlPtx11PXm5pIS2w3bXI7mY0uHUMGvxAzta74zKXLslaLaSQibSKjWKt9h-SsXy4JGqcVefOlaQlJfXL1Tga6wcO0QTu6Xq-Uw7ZPNPnrpBrLauKDd202RlN4SP7ohL3d9bG6V5hUz_3OusNEBZUn5W3VmPj1ZnFavkMB3RkRMOa58MZAORJT4imAPzrvJ0vtv94_y71C6tZ5aGF1dGhEYXRhWMQSyhe0mvIolDbzA-AWYDCiHlJdJm4gkmdDOAGo_UBxoEEAAAAAAAAAAAAAAAAAAAAAAAAAAABA0xYE4bQ_HZM51-XYwp7WHJu8RfeA2Oz3_9HnNIZAKqRTz9gsUlF3QO7EqcJ0pgLSwDcq6cL1_aQpTtKLeGu6IqUBAgMmIAEhWCCe1KvqpcVWN416_QZc8vJynt3uo3_WeJ2R4uj6kJbaiiJYIDC5ssxxummKviGgLoP9ZLFb836A9XfRO7op18QY3i5m",
        "clientDataJSON": "eyJjaGFsbGVuZ2UiOiJBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBQUFBIiwiY2xpZW50RXh0ZW5zaW9ucyI6e30sImhhc2hBbGdvcml0aG0iOiJTSEEtMjU2Iiwib3JpZ2luIjoiaHR0cDovLzEyNy4wLjAuMTo4MDgwIiwidHlwZSI6IndlYmF1dGhuLmNyZWF0ZSJ9"
    },
    "type": "public-key"
}"#;

pub const U2F_LOCALHOST_CHALLENGE: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Yubico security key, fido-u2f, rp `webauthn.io`.
pub const U2F_WEBAUTHN_IO_REGISTRATION: &str = r#"{
    "id": "FOxcmsqPLNCHtyILvbNkrtHMdKAeqSJXYZDbeFd0kc5Enm8Kl6a0Jp0szgLilDw1S4CjZhe9Z2611EUGbjyEmg",
    "rawId": "FOxcmsqPLNCHtyILvbNkrtHMdKAeqSJXYZDbeFd0kc5Enm8Kl6a0Jp0szgLilDw1S4CjZhe9Z2611EUGbjyEmg",
    "response": {
        "attestationObject": "o2NmbXRoZmlkby11MmZnYXR0U3RtdKJjc2lnWEYwRAIgfyIhwZj-fkEVyT1GOK8chDHJR2chXBLSRg6bTCjODmwCIHH6GXI_BQrcR-GHg5JfazKVQdezp6_QWIFfT4ltTCO2Y3g1Y4FZAlMwggJPMIIBN6ADAgECAgQSNtF_MA0GCSqGSIb3DQEBCwUAMC4xLDAqBgNVBAMTI1l1YmljbyBVMkYgUm9vdCBDQSBTZXJpYWwgNDU3MjAwNjMxMCAXDTE0MDgwMTAwMDAwMFoYDzIwNTAwOTA0MDAwMDAwWjAxMS8wLQYDVQQDDCZZdWJpY28gVTJGIEVFIFNlcmlhbCAyMzkyNTczNDEwMzI0MTA4NzBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABNNlqR5emeDVtDnA2a-7h_QFjkfdErFE7bFNKzP401wVE-QNefD5maviNnGVk4HJ3CsHhYuCrGNHYgTM9zTWriGjOzA5MCIGCSsGAQQBgsQKAgQVMS4zLjYuMS40LjEuNDE0ODIuMS41MBMGCysGAQQBguUcAgEBBAQDAgUgMA0GCSqGSIb3DQEBCwUAA4IBAQAiG5uzsnIk8T6-oyLwNR6vRklmo29yaYV8jiP55QW1UnXdTkEiPn8mEQkUac-Sn6UmPmzHdoGySG2q9B-xz6voVQjxP2dQ9sgbKd5gG15yCLv6ZHblZKkdfWSrUkrQTrtaziGLFSbxcfh83vUjmOhDLFC5vxV4GXq2674yq9F2kzg4nCS4yXrO4_G8YWR2yvQvE2ffKSjQJlXGO5080Ktptplv5XN4i5lS-AKrT5QRVbEJ3B4g7G0lQhdYV-6r4ZtHil8mF4YNMZ0-RaYPxAaYNWkFYdzOZCaIdQbXRZefgGfbMUiAC2gwWN7fiPHV9eu82NYypGU32OijG9BjhGt_aGF1dGhEYXRhWMR0puqSE8mcL3SyJJKzIM9AJiqUwalQoDl_KSULYIQe8EEAAAAAAAAAAAAAAAAAAAAAAAAAAABAFOxcmsqPLNCHtyILvbNkrtHMdKAeqSJXYZDbeFd0kc5Enm8Kl6a0Jp0szgLilDw1S4CjZhe9Z2611EUGbjyEmqUBAgMmIAEhWCD_ap3Q9zU8OsGe967t48vyRxqn8NfFTk307mC1WsH2ISJYIIcqAuW3MxhU0uDtaSX8-Ftf_zeNJLdCOEjZJGHsrLxH",
        "clientDataJSON": "eyJjaGFsbGVuZ2UiOiItUmk1TlpUeko4YjZtdlczVFZTY0xvdEVvQUxmZ0JhMkJuNFlTYUlPYkhjIiwib3JpZ2luIjoiaHR0cHM6Ly93ZWJhdXRobi5pbyIsInR5cGUiOiJ3ZWJhdXRobi5jcmVhdGUifQ"
    },
    "type": "public-key"
}"#;

pub const U2F_WEBAUTHN_IO_CHALLENGE: &str = "-Ri5NZTzJ8b6mvW3TVScLotEoALfgBa2Bn4YSaIObHc";

/// Chrome 77 with Touch ID, packed self attestation, rp `localhost`, origin `https://localhost:8443`.
pub const TOUCH_ID_REGISTRATION: &str = r#"{
    "id": "ATk_7QKbi_ntSdp16LXeU6RDf9YnRLIDTCqEjJFzc6rKBhbqoSYccxNa",
    "rawId": "ATk_7QKbi_ntSdp16LXeU6RDf9YnRLIDTCqEjJFzc6rKBhbqoSYccxNa",
    "response": {
        "attestationObject": "o2NmbXRmcGFja2VkZ2F0dFN0bXSiY2FsZyZjc2lnWEcwRQIgLXPjBtVEhBH3KdUDFFk3LAd9EtHogllIf48vjX4wgfECIQCXOymmfg12FPMXEdwpSjjtmrvki4K8y0uYxqWN5Bw6DGhhdXRoRGF0YViuSZYN5YgOjGh0NBcPZHZgW4_krrmihjLHmVzzuoMdl2NFXaqejq3OAAI1vMYKZIsLJfHwVQMAKgE5P-0Cm4v57Unadei13lOkQ3_WJ0SyA0wqhIyRc3OqygYW6qEmHHMTWqUBAgMmIAEhWCDNRS_Gw52ow5PNrC9OdFTFNudDmZO6Y3wmM9N8e0tJICJYIC09iIH5_RrT5tbS0PIw3srdAxYDMGao7yWgu0JFIEzT",
        "clientDataJSON": "eyJjaGFsbGVuZ2UiOiJsUDZtV05BdEctX1Z2MTVpTTdsYl9YUmtkV012VlEtbFR5S3dadU9nMVZvIiwiZXh0cmFfa2V5c19tYXlfYmVfYWRkZWRfaGVyZSI6ImRvIG5vdCBjb21wYXJlIGNsaWVudERhdGFKU09OIGFnYWluc3QgYSB0ZW1wbGF0ZS4gU2VlIGh0dHBzOi8vZ29vLmdsL3lhYlBleCIsIm9yaWdpbiI6Imh0dHBzOi8vbG9jYWxob3N0Ojg0NDMiLCJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIn0"
    },
    "type": "public-key"
}"#;

pub const TOUCH_ID_CHALLENGE: &str = "lP6mWNAtG-_Vv15iM7lb_XRkdWMvVQ-lTyKwZuOg1Vo";

/// YubiKey 5, packed full attestation with the credProtect extension, rp `localhost`, origin `http://localhost:8080`.
pub const YUBIKEY_PACKED_REGISTRATION: &str = r#"{
    "id": "9KJylaUgVoWF2cF2qX5an7ZtPBFeRMXy-jMSGgNWCogxiyctVFtIcDKmkVmfKOgllffKJMyl4gFeDm8KaltrDw",
    "rawId": "9KJylaUgVoWF2cF2qX5an7ZtPBFeRMXy-jMSGgNWCogxiyctVFtIcDKmkVmfKOgllffKJMyl4gFeDm8KaltrDw",
    "response": {
        "attestationObject": "o2NmbXRmcGFja2VkZ2F0dFN0bXSjY2FsZyZjc2lnWEYwRAIgZEq9euYGkqTP4VMBs-5fruhwAPSyKjOlr2THNZGvZ3gCIHww2gAgZXvZcIwcSiUF3fHhaNL0uj8V5rOLHyGRJz81Y3g1Y4FZAsEwggK9MIIBpaADAgECAgQej4c0MA0GCSqGSIb3DQEBCwUAMC4xLDAqBgNVBAMTI1l1YmljbyBVMkYgUm9vdCBDQSBTZXJpYWwgNDU3MjAwNjMxMCAXDTE0MDgwMTAwMDAwMFoYDzIwNTAwOTA0MDAwMDAwWjBuMQswCQYDVQQGEwJTRTESMBAGA1UECgwJWXViaWNvIEFCMSIwIAYDVQQLDBlBdXRoZW50aWNhdG9yIEF0dGVzdGF0aW9uMScwJQYDVQQDDB5ZdWJpY28gVTJGIEVFIFNlcmlhbCA1MTI3MjI3NDAwWTATBgcqhkjOPQIBBggqhkjOPQMBBwNCAASoefgjOO0UlLrAcEvMf8Zj0bJxcVl2JDEBx2BRFdfBUp4oHBxnMi04S1zVXdPpgY1f2FwirzJuDGT8IK_jPyNmo2wwajAiBgkrBgEEAYLECgIEFTEuMy42LjEuNC4xLjQxNDgyLjEuNzATBgsrBgEEAYLlHAIBAQQEAwIEMDAhBgsrBgEEAYLlHAEBBAQSBBAvwFefgRNH6rEWu1qNuSAqMAwGA1UdEwEB_wQCMAAwDQYJKoZIhvcNAQELBQADggEBAIaT_2LfDVd51HSNf8jRAicxio5YDmo6V8EI6U4Dw4Vos2aJT85WJL5KPv1_NBGLPZk3Q_eSoZiRYMj8muCwTj357hXj6IwE_IKo3L9YGOEI3MKWhXeuef9mK5RzTj3sRZcwXXPm5V7ivrnNlnjKCTXlM-tjj44m-ruBfNpEH76YMYMq5fbirZkvnrvbTGIji4-NerSB1tMmO82_nkpXVQNwmIrVgTRA-gMsrbZyPK3Y-Ne6gJ91tDz_oKW5rdFCMu-dnhSBJjgjPEykqHO5-KyY4yuhkWdgbhWQn83bSi3_va5GICSfmmZGrIHkgy0RGf6_qnMaiC2iWneCfUbRkBdoYXV0aERhdGFY0kmWDeWIDoxodDQXD2R2YFuP5K65ooYyx5lc87qDHZdjxQAAAAEvwFefgRNH6rEWu1qNuSAqAED0onKVpSBWhYXZwXapflqftm08EV5ExfL6MxIaA1YKiDGLJy1UW0hwMqaRWZ8o6CWV98okzKXiAV4ObwpqW2sPpQECAyYgASFYIB_nQH-kBm4OmDfqezjFDr_t0Psz6JrylkEPWHFs2UB-Ilgg7xkwKc-IHHIwPI8EJ5ycM1zvWDnm4bCarn1LAWAU3Dqha2NyZWRQcm90ZWN0Aw",
        "clientDataJSON": "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiZlhmQ1EtTVdtSWJjajB0M3hhVnpsYnVaMHpQWGdPRTRibEEwNjVXU1pjbyIsIm9yaWdpbiI6Imh0dHA6Ly9sb2NhbGhvc3Q6ODA4MCIsImNyb3NzT3JpZ2luIjpmYWxzZSwib3RoZXJfa2V5c19jYW5fYmVfYWRkZWRfaGVyZSI6ImRvIG5vdCBjb21wYXJlIGNsaWVudERhdGFKU09OIGFnYWluc3QgYSB0ZW1wbGF0ZS4gU2VlIGh0dHBzOi8vZ29vLmdsL3lhYlBleCJ9"
    },
    "type": "public-key"
}"#;

pub const YUBIKEY_PACKED_CHALLENGE: &str = "fXfCQ-MWmIbcj0t3xaVzlbuZ0zPXgOE4blA065WSZco";

/// YubiKey 5 assertion for a credential registered with counter 1, rp `localhost`, origin `http://localhost:8080`.
pub const YUBIKEY_AUTHENTICATION: &str = r#"{
    "id": "at-FfKGsOI21EhtCu7Vx-7t7FKkpUOyKXIkEBBD_vC-eym_AdW6Y9V8WyKxHmii11EBQEe7uFQ0bkYwb0GWmUQ",
    "rawId": "at-FfKGsOI21EhtCu7Vx-7t7FKkpUOyKXIkEBBD_vC-eym_AdW6Y9V8WyKxHmii11EBQEe7uFQ0bkYwb0GWmUQ",
    "response": {
        "authenticatorData": "SZYN5YgOjGh0NBcPZHZgW4_krrmihjLHmVzzuoMdl2MBAAAAFA",
        "clientDataJSON": "eyJjaGFsbGVuZ2UiOiJXZ1h6X2tUdjNXVVUxa3c4aG0tT0dvR1M0WkNIWF8zYkVxSEgyUHZWcDhNIiwiY2xpZW50RXh0ZW5zaW9ucyI6e30sImhhc2hBbGdvcml0aG0iOiJTSEEtMjU2Iiwib3JpZ2luIjoiaHR0cDovL2xvY2FsaG9zdDo4MDgwIiwidHlwZSI6IndlYmF1dGhuLmdldCJ9",
        "signature": "MEYCIQDmLVOqv85cdRup4Fr8Pf9zC4AWO-XKBJqa8xPwYFCCMAIhAOiExLoyes0xipmUmq0BVlqJaCKLn_MFKG9GIDsCGq_-",
        "userHandle": null
    },
    "type": "public-key"
}"#;

pub const YUBIKEY_AUTHENTICATION_CHALLENGE: &str = "WgXz_kTv3WUU1kw8hm-OGoGS4ZCHX_3bEqHH2PvVp8M";

pub const YUBIKEY_CREDENTIAL_X: [u8; 32] = [
    46, 121, 76, 233, 118, 208, 250, 74, 227, 182, 8, 145, 45, 46, 5, 9, 199, 186, 84, 83, 7, 237, 130, 73, 16, 90, 17, 54, 33, 255,
    54, 56,
];

pub const YUBIKEY_CREDENTIAL_Y: [u8; 32] = [
    117, 105, 1, 23, 253, 223, 67, 135, 253, 219, 253, 223, 17, 247, 91, 197, 205, 225, 143, 59, 47, 138, 70, 120, 74, 155, 177,
    177, 166, 233, 48, 71,
];

pub const ROOT_CERT: &str = "MIIBuDCCAV6gAwIBAgICAQAwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjBDMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxHjAcBgNVBAMMFVRlc3QgQXR0ZXN0YXRpb24gUm9vdDBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABK4PbUyNmBuWmN2aHubo07JkLsdRm-nzVl-FMG1J6chfolFpiAQsJ7fqA9qSYSu0Ef8dDKG9TkCe1IRCANhlqVGjQjBAMA8GA1UdEwEB_wQFMAMBAf8wDgYDVR0PAQH_BAQDAgEGMB0GA1UdDgQWBBSY66VbkZ9LM6znpfwMfcl1anG6tTAKBggqhkjOPQQDAgNIADBFAiBIYWrj8ERvtuiVdWG5IYjadsCOZ_NU8nc1GzFngcSejQIhAK-lsLkuyRy2n54YSR0ZetD5Ohvt5ddgjXeXW-L70igY";

pub const OTHER_ROOT_CERT: &str = "MIIBNTCB26ADAgECAgICADAKBggqhkjOPQQDAjAZMRcwFQYDVQQDDA5VbnJlbGF0ZWQgUm9vdDAeFw0yMDAxMDEwMDAwMDBaFw00MDAxMDEwMDAwMDBaMBkxFzAVBgNVBAMMDlVucmVsYXRlZCBSb290MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE9tSMA39xzud_qiAnuA8yXQe2IgHgEDRRmiV3fzRnh65Uj9pI5oOkCcjr6QSoEKRknGnKstg4WhFwAPpSDU7In6MTMBEwDwYDVR0TAQH_BAUwAwEB_zAKBggqhkjOPQQDAgNJADBGAiEAinmc9aUEXKSZyKLajXh7v2VpdV3rCmhoVqcLXNqqfuACIQCHMqvbFJNwdwhlCfnroTktvCGxScNTotmG1y23ZMkQuw";

pub const LEAF_CERT: &str = "MIICKDCCAc6gAwIBAgICEAEwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjBsMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxIjAgBgNVBAsMGUF1dGhlbnRpY2F0b3IgQXR0ZXN0YXRpb24xIzAhBgNVBAMMGlRlc3QgQXR0ZXN0YXRpb24gTGVhZiA0MDk3MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEqBu2ze_5cUQx7MZ-3UQ2455xYP71MemsMH9cfTnekOTvSZNrBcq4mTitYHsVeszdvpxvxyZR7beIT0nUfpAO5KOBiDCBhTAMBgNVHRMBAf8EAjAAMB8GA1UdIwQYMBaAFJjrpVuRn0szrOel_Ax9yXVqcbq1MDEGA1UdHwQqMCgwJqAkoCKGIGh0dHA6Ly9jcmwuZXhhbXBsZS50ZXN0L3Jvb3QuY3JsMCEGCysGAQQBguUcAQEEBBIEEGAosBex1EwCtLOvza_Ja7IwCgYIKoZIzj0EAwIDSAAwRQIhAJQ3ZYqF28h2QAZlVREciZDpm-7KMqbnJg25Arm6tXDAAiAQ1Qyffcq7rDYRlnnDvP2MmR5hcxuSrXSgQ5Ny2Vj-GQ";

pub const REVOKED_LEAF_CERT: &str = "MIICJzCCAc6gAwIBAgICEAIwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjBsMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxIjAgBgNVBAsMGUF1dGhlbnRpY2F0b3IgQXR0ZXN0YXRpb24xIzAhBgNVBAMMGlRlc3QgQXR0ZXN0YXRpb24gTGVhZiA0MDk4MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEqBu2ze_5cUQx7MZ-3UQ2455xYP71MemsMH9cfTnekOTvSZNrBcq4mTitYHsVeszdvpxvxyZR7beIT0nUfpAO5KOBiDCBhTAMBgNVHRMBAf8EAjAAMB8GA1UdIwQYMBaAFJjrpVuRn0szrOel_Ax9yXVqcbq1MDEGA1UdHwQqMCgwJqAkoCKGIGh0dHA6Ly9jcmwuZXhhbXBsZS50ZXN0L3Jvb3QuY3JsMCEGCysGAQQBguUcAQEEBBIEEGAosBex1EwCtLOvza_Ja7IwCgYIKoZIzj0EAwIDRwAwRAIgJgsykhe0ZGN7ITjAzyJ2Md_FdsBKtuq6P5Sc7LevEicCIEAmXd__w3rR5vq9clemM33UKyrJN71YTQ89qdG-VGWN";

pub const ROOT_CRL: &str = "MIIBBzCBrgIBATAKBggqhkjOPQQDAjBDMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxHjAcBgNVBAMMFVRlc3QgQXR0ZXN0YXRpb24gUm9vdBcNMjMwMTAxMDAwMDAwWhcNMzAwMTAxMDAwMDAwWjAVMBMCAhACFw0yMzAxMDEwMDAwMDBaoCMwITAfBgNVHSMEGDAWgBSY66VbkZ9LM6znpfwMfcl1anG6tTAKBggqhkjOPQQDAgNIADBFAiAPaMx72TwoiYFZwagvajzzI5fL15lf5DYjAaeLHLvenwIhAKbIjqIN4R528dMAmn7k2yzsEjcD0RzvW6impEOuBqfm";

pub const PACKED_CHALLENGE: &str = "-ZOTJyvN7mupxC9fTUv-iiGVwlSISPiaeilEZaR86kk";

pub const PACKED_CREDENTIAL_ID: &str = "rHNuP7MYSV8IiduYmGkIzPQg6et9zL-NZZtQ_rCXyQ0";

pub const PACKED_ATTESTATION_OBJECT: &str = "o2NmbXRmcGFja2VkZ2F0dFN0bXSjY2FsZyZjc2lnWEcwRQIhAKIB4hvg8pJ9eTkmVpKtJuGJ24Exd20X6ueEZK2HK4N_AiAHr2i6E4vZl-aRm0y8h8sAFK8i2CVphEl3uUh3SHkxsGN4NWOBWQIsMIICKDCCAc6gAwIBAgICEAEwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjBsMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxIjAgBgNVBAsMGUF1dGhlbnRpY2F0b3IgQXR0ZXN0YXRpb24xIzAhBgNVBAMMGlRlc3QgQXR0ZXN0YXRpb24gTGVhZiA0MDk3MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEqBu2ze_5cUQx7MZ-3UQ2455xYP71MemsMH9cfTnekOTvSZNrBcq4mTitYHsVeszdvpxvxyZR7beIT0nUfpAO5KOBiDCBhTAMBgNVHRMBAf8EAjAAMB8GA1UdIwQYMBaAFJjrpVuRn0szrOel_Ax9yXVqcbq1MDEGA1UdHwQqMCgwJqAkoCKGIGh0dHA6Ly9jcmwuZXhhbXBsZS50ZXN0L3Jvb3QuY3JsMCEGCysGAQQBguUcAQEEBBIEEGAosBex1EwCtLOvza_Ja7IwCgYIKoZIzj0EAwIDSAAwRQIhAJQ3ZYqF28h2QAZlVREciZDpm-7KMqbnJg25Arm6tXDAAiAQ1Qyffcq7rDYRlnnDvP2MmR5hcxuSrXSgQ5Ny2Vj-GWhhdXRoRGF0YViko3mm9u6vuaVeN4wRgDTidR5oL6ufLTCrE9ISVYbOGUdFAAAAAGAosBex1EwCtLOvza_Ja7IAIKxzbj-zGElfCInbmJhpCMz0IOnrfcy_jWWbUP6wl8kNpQECAyYgASFYILd9uDrVXgQsjhCiYoaHLDc94m30U4iDy5cXtnoibAloIlgg6hA3OCjS2RVPnfpTnbKQvjfDRFNQp3HtSNcNF0Am8vc";

pub const PACKED_CLIENT_DATA_JSON: &str = "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiLVpPVEp5dk43bXVweEM5ZlRVdi1paUdWd2xTSVNQaWFlaWxFWmFSODZrayIsIm9yaWdpbiI6Imh0dHBzOi8vZXhhbXBsZS5jb20iLCJjcm9zc09yaWdpbiI6ZmFsc2V9";

pub const PACKED_REVOKED_CHALLENGE: &str = "RMemoB9AHLNHx6hzzVYV3MpCFW6DrdNft4QHpMN-Vtc";

pub const PACKED_REVOKED_CREDENTIAL_ID: &str = "9Ge0vtmJOuovEyiTY3OriFnZYqp_vH6gVOmigGQHHKU";

pub const PACKED_REVOKED_ATTESTATION_OBJECT: &str = "o2NmbXRmcGFja2VkZ2F0dFN0bXSjY2FsZyZjc2lnWEcwRQIhAJSiYWfoS54PPyhzXJtkfOZcsB4Ike9ef-9ylwTwlkDlAiBSwxXGaW_F3Lv7wDsL8wY7Ww4tLA_lixlzai5Fz9mLQ2N4NWOBWQIrMIICJzCCAc6gAwIBAgICEAIwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjBsMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxIjAgBgNVBAsMGUF1dGhlbnRpY2F0b3IgQXR0ZXN0YXRpb24xIzAhBgNVBAMMGlRlc3QgQXR0ZXN0YXRpb24gTGVhZiA0MDk4MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEqBu2ze_5cUQx7MZ-3UQ2455xYP71MemsMH9cfTnekOTvSZNrBcq4mTitYHsVeszdvpxvxyZR7beIT0nUfpAO5KOBiDCBhTAMBgNVHRMBAf8EAjAAMB8GA1UdIwQYMBaAFJjrpVuRn0szrOel_Ax9yXVqcbq1MDEGA1UdHwQqMCgwJqAkoCKGIGh0dHA6Ly9jcmwuZXhhbXBsZS50ZXN0L3Jvb3QuY3JsMCEGCysGAQQBguUcAQEEBBIEEGAosBex1EwCtLOvza_Ja7IwCgYIKoZIzj0EAwIDRwAwRAIgJgsykhe0ZGN7ITjAzyJ2Md_FdsBKtuq6P5Sc7LevEicCIEAmXd__w3rR5vq9clemM33UKyrJN71YTQ89qdG-VGWNaGF1dGhEYXRhWKSjeab27q-5pV43jBGANOJ1Hmgvq58tMKsT0hJVhs4ZR0UAAAAAYCiwF7HUTAK0s6_Nr8lrsgAg9Ge0vtmJOuovEyiTY3OriFnZYqp_vH6gVOmigGQHHKWlAQIDJiABIVgg0NWOodq0QH9khpmcifeFkm_zFGGeTz63x7_W0cMHILQiWCBHkeV1mXdiz2Nr6CwscTzzMsCg8Phtch9fc3Rw9z8ZdA";

pub const PACKED_REVOKED_CLIENT_DATA_JSON: &str = "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiUk1lbW9COUFITE5IeDZoenpWWVYzTXBDRlc2RHJkTmZ0NFFIcE1OLVZ0YyIsIm9yaWdpbiI6Imh0dHBzOi8vZXhhbXBsZS5jb20iLCJjcm9zc09yaWdpbiI6ZmFsc2V9";

pub const APPLE_CHALLENGE: &str = "OnvT4jYKPSnupDb8-35ExzXRF8QtHBg1QgtrmULdTxs";

pub const APPLE_CREDENTIAL_ID: &str = "QxF2SF8-E7INDl6N_4GPUDXMxLs";

pub const APPLE_ATTESTATION_OBJECT: &str = "o2NmbXRlYXBwbGVnYXR0U3RtdKJjYWxnJmN4NWOCWQGyMIIBrjCCAVSgAwIBAgICMAEwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjA2MR4wHAYDVQQDDBVUZXN0IEFwcGxlIENyZWRlbnRpYWwxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE9RuQ0-m5kI1499dCAcbTLIA52NpKreZpN0PNloWurbjpGznulHlNQzmDD6ly3cjE4JOUu8yEzpDNI4-8quJxS6NFMEMwDAYDVR0TAQH_BAIwADAzBgkqhkiG92NkCAIEJjAkoSIEIEJaq-wlrSJJlbX69Rr2SO4Vtaf5tmn_gzdBdvAb4QKRMAoGCCqGSM49BAMCA0gAMEUCIQD2Ef315uSfvly85HwTvx1vNuSrafsFUKEaF__giAtZdgIgLYLmmNdRRazY5B818OfTU5pJ6VFveckip02I2Tv-0w9ZAbwwggG4MIIBXqADAgECAgIBADAKBggqhkjOPQQDAjBDMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxHjAcBgNVBAMMFVRlc3QgQXR0ZXN0YXRpb24gUm9vdDAeFw0yMDAxMDEwMDAwMDBaFw00MDAxMDEwMDAwMDBaMEMxCzAJBgNVBAYTAlNFMRQwEgYDVQQKDAtUZXN0IFZlbmRvcjEeMBwGA1UEAwwVVGVzdCBBdHRlc3RhdGlvbiBSb290MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAErg9tTI2YG5aY3Zoe5ujTsmQux1Gb6fNWX4UwbUnpyF-iUWmIBCwnt-oD2pJhK7QR_x0Mob1OQJ7UhEIA2GWpUaNCMEAwDwYDVR0TAQH_BAUwAwEB_zAOBgNVHQ8BAf8EBAMCAQYwHQYDVR0OBBYEFJjrpVuRn0szrOel_Ax9yXVqcbq1MAoGCCqGSM49BAMCA0gAMEUCIEhhauPwRG-26JV1YbkhiNp2wI5n81TydzUbMWeBxJ6NAiEAr6WwuS7JHLafnhhJHRl60Pk6G-3l12CNd5db4vvSKBhoYXV0aERhdGFYmKN5pvbur7mlXjeMEYA04nUeaC-rny0wqxPSElWGzhlHRQAAAAAAAAAAAAAAAAAAAAAAAAAAABRDEXZIXz4Tsg0OXo3_gY9QNczEu6UBAgMmIAEhWCD1G5DT6bmQjXj310IBxtMsgDnY2kqt5mk3Q82Wha6tuCJYIOkbOe6UeU1DOYMPqXLdyMTgk5S7zITOkM0jj7yq4nFL";

pub const APPLE_CLIENT_DATA_JSON: &str = "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiT252VDRqWUtQU251cERiOC0zNUV4elhSRjhRdEhCZzFRZ3RybVVMZFR4cyIsIm9yaWdpbiI6Imh0dHBzOi8vZXhhbXBsZS5jb20iLCJjcm9zc09yaWdpbiI6ZmFsc2V9";

pub const TPM_CHALLENGE: &str = "UzVB-0ZaC93VzOhf0PNrywJy9j5D3jzdCAvi4i_0a4U";

pub const TPM_CREDENTIAL_ID: &str = "OJLQV5xcXN5GYxZXFrCUqe4x2SMZaPpKEqnZGTZh7IE";

pub const TPM_ATTESTATION_OBJECT: &str = "o2NmbXRjdHBtZ2F0dFN0bXSmY3ZlcmMyLjBjYWxnOQEAY3g1Y4JZAnQwggJwMIICFqADAgECAgJAATAKBggqhkjOPQQDAjBDMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxHjAcBgNVBAMMFVRlc3QgQXR0ZXN0YXRpb24gUm9vdDAeFw0yMDAxMDEwMDAwMDBaFw00MDAxMDEwMDAwMDBaMAAwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQDIninRLRcwj7NgcitgcBP_vxsjPa5FPeOXH3u6WZSfbkJzeiIprkh6qhMV-VvbOruaIfwBURrKjHn3HGIXEk2M5W6-8GnW7V8Fn7nHP9UPV4zluCQFJWeNni3FpixIWBr1HQAB23k9OtULdvzg9KDLOGn7GBfjIrz4p7fd6p2nGwTzp2zHkBWh_jBl-QsVOJa6ttczPfHgU3_hxx3PU5snFvI94Tye7r5eZp5v1i8U8A-7ojzvR1IhE0G9sDXMmlHINqKzfXNzkM9Ys8pYCfYIHV5SX5CAk6ql6-b6r0A1N_k0mADkrYdsosDBmKG6o_u-WDzyRNm4pQJqkVUENtNPAgMBAAGjcjBwMAwGA1UdEwEB_wQCMAAwTgYDVR0RAQH_BEQwQqRAMD4xFjAUBgVngQUCAQwLaWQ6NEU1NDQzMDAxEjAQBgVngQUCAgwHTlBDVDZ4eDEQMA4GBWeBBQIDDAVpZDoxMzAQBgNVHSUECTAHBgVngQUIAzAKBggqhkjOPQQDAgNIADBFAiBUzb-9QC1UFhVxH-Pl6P2tEEpLptst2tvByBckRvEhTQIhAM9WgYk4RIPwVxoI2syPxtdBFXAznOktm3vmSt_7F0ZCWQG8MIIBuDCCAV6gAwIBAgICAQAwCgYIKoZIzj0EAwIwQzELMAkGA1UEBhMCU0UxFDASBgNVBAoMC1Rlc3QgVmVuZG9yMR4wHAYDVQQDDBVUZXN0IEF0dGVzdGF0aW9uIFJvb3QwHhcNMjAwMTAxMDAwMDAwWhcNNDAwMTAxMDAwMDAwWjBDMQswCQYDVQQGEwJTRTEUMBIGA1UECgwLVGVzdCBWZW5kb3IxHjAcBgNVBAMMFVRlc3QgQXR0ZXN0YXRpb24gUm9vdDBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABK4PbUyNmBuWmN2aHubo07JkLsdRm-nzVl-FMG1J6chfolFpiAQsJ7fqA9qSYSu0Ef8dDKG9TkCe1IRCANhlqVGjQjBAMA8GA1UdEwEB_wQFMAMBAf8wDgYDVR0PAQH_BAQDAgEGMB0GA1UdDgQWBBSY66VbkZ9LM6znpfwMfcl1anG6tTAKBggqhkjOPQQDAgNIADBFAiBIYWrj8ERvtuiVdWG5IYjadsCOZ_NU8nc1GzFngcSejQIhAK-lsLkuyRy2n54YSR0ZetD5Ohvt5ddgjXeXW-L70igYY3NpZ1kBALgN3yYdOomqEXUdEzUVAJM04WCNgxSsYJhDMJMMB906WQrJ_Vc_6QGlDDq0Qhni_smHR663-8zJ-9_NRX6CH0uHBHIk6PH_IAdG8H2FMpIVwjeV7P17kcq8immjeMkEOkAvNyjVa_qp-oHCVmrWn-6VlhF5yjFUbVXonrEnUyMzJol3kPeyIQ52YbYU1mBTIPLeJNImPYDFQH5syRczbxumIvwRLwd8tAO7OLsapQLskwC7bw0Q0WPMDEH0JB9qSlDtxhRVG-lZHpaWqVzTKjotjeycHuypTE3JBlnvvI00vZyMlZiUl31Hua_5fB1uQnrGo4trynmg2ZANXDdEmoxoY2VydEluZm9Yrf9UQ0eAFwAiAAtAyustMNMQCWyk4fk3Pe1m_isAyuBPqj6P1kg9hqB6uAAgSYfH2iGhAHJEfzOTucQiclf4XHNUELAKl2Ub-3CU4CIAAAAAB1vNFQAAAAMAAAABAQACAAMAAQAAACIACz7DchYGdO5k6OvO_8HF9quWrMy0dov1qFJAVAA9smrBACIAC0DK6y0w0xAJbKTh-Tc97Wb-KwDK4E-qPo_WSD2GoHq4Z3B1YkFyZWFYVgAjAAsABgRyAAAAEAAQAAMAEAAgVEafu9pMND9ragfAbQoU7RQj6UwFbqYgJTGjbHRVNfEAIBGctZCkhDdGz-lc_0PUmT1c8wuVP_YOg3GccWaCA1ZOaGF1dGhEYXRhWKSjeab27q-5pV43jBGANOJ1Hmgvq58tMKsT0hJVhs4ZR0UAAAAACJhwWMrcS4G24TDeUNy-lgAgOJLQV5xcXN5GYxZXFrCUqe4x2SMZaPpKEqnZGTZh7IGlAQIDJiABIVggVEafu9pMND9ragfAbQoU7RQj6UwFbqYgJTGjbHRVNfEiWCARnLWQpIQ3Rs_pXP9D1Jk9XPMLlT_2DoNxnHFmggNWTg";

pub const TPM_CLIENT_DATA_JSON: &str = "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiVXpWQi0wWmFDOTNWek9oZjBQTnJ5d0p5OWo1RDNqemRDQXZpNGlfMGE0VSIsIm9yaWdpbiI6Imh0dHBzOi8vZXhhbXBsZS5jb20iLCJjcm9zc09yaWdpbiI6ZmFsc2V9";

pub const TPM_PUB_AREA: &str = "ACMACwAGBHIAAAAQABAAAwAQACBURp-72kw0P2tqB8BtChTtFCPpTAVupiAlMaNsdFU18QAgEZy1kKSEN0bP6Vz_Q9SZPVzzC5U_9g6DcZxxZoIDVk4";

pub const TPM_CERT_INFO: &str = "_1RDR4AXACIAC0DK6y0w0xAJbKTh-Tc97Wb-KwDK4E-qPo_WSD2GoHq4ACBJh8faIaEAckR_M5O5xCJyV_hcc1QQsAqXZRv7cJTgIgAAAAAHW80VAAAAAwAAAAEBAAIAAwABAAAAIgALPsNyFgZ07mTo687_wcX2q5aszLR2i_WoUkBUAD2yasEAIgALQMrrLTDTEAlspOH5Nz3tZv4rAMrgT6o-j9ZIPYagerg";

pub const SAFETYNET_ROOT_CERT: &str = "MIIC2zCCAcOgAwIBAgICUAAwDQYJKoZIhvcNAQELBQAwHjEcMBoGA1UEAwwTVGVzdCBTYWZldHlOZXQgUm9vdDAeFw0yMDAxMDEwMDAwMDBaFw00MDAxMDEwMDAwMDBaMB4xHDAaBgNVBAMME1Rlc3QgU2FmZXR5TmV0IFJvb3QwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQCoDGvY7AGm2xBrsykF5gVGVpCr9KSkGAJ6hdVlnRvzO07_Ky5YCsO4wiVMv1YOccgFnfzN2sYKEv5hjuYJRB90bfSfcts1cM6beyGiQTmG9W4COKhYfJQK4JCug5RFry2XHvWh7jucTvkq807-i_hqn2HSA4UBkJMdYvgtVjGyWkc82hfKVqMxAe2Y9fGhY306hv7ibAPBM4BAdzd6D-YPWycD4Osc6Il8BZ1nmHxWScQjXVM677GxmQBGPnSL-Asgo62n_XXMvuATd3RjzmqSwOw1UOzFP81OiaQgnlUW1rT3W65uiR0kPb2jcRKBAbFP63Pv4wXVp6Lq3-ob1vG7AgMBAAGjIzAhMA8GA1UdEwEB_wQFMAMBAf8wDgYDVR0PAQH_BAQDAgEGMA0GCSqGSIb3DQEBCwUAA4IBAQCmegEFeLYdkxa4eqNPbYpixM5n7DIsbKaox_ycPN4rhsh4OZ1aqki956lJT-m8GJ-7Db9fBMudH51V3c84QRc7n-XPIpkwDTnFy_0PFDMqaCt6KNSD3q6dcA7ZuNh1YPQDiIVWr8w16fyKkFuyrnFZCd2VvaAO-PkxsS_DzKtLeHS0H-lrpDJspHDaX-iAeyg9i6f6oH6V86vQvjHbR2-ZZfOgMyHUosc2GR0BnEvedO--ZAYOSNtGHTSSMqyIz695cO3wD-QQEiIyC-OEohxGYtpmzS07TprQ8yl8WnAighvCkAkndDe1jt9xqVLphPyf9hf1Am5DGT5pr1fXQ_bC";

pub const SAFETYNET_CHALLENGE: &str = "g_ETuJcrwxB26ekbGvB51TH9VAbVT-CMoye7oA9PrFQ";

pub const SAFETYNET_CREDENTIAL_ID: &str = "8N3jm7Km8RybO2seUWyGqXSj6mGGFURGcci0f3l0Ys8";

pub const SAFETYNET_ATTESTATION_OBJECT: &str = "o2NmbXRxYW5kcm9pZC1zYWZldHluZXRnYXR0U3RtdKJjdmVyaTIzMzAxMzA0NGhyZXNwb25zZVkH32V5SmhiR2NpT2lKU1V6STFOaUlzSW5nMVl5STZXeUpOU1VsREszcERRMEZsVDJkQmQwbENRV2RKUTFWQlJYZEVVVmxLUzI5YVNXaDJZMDVCVVVWTVFsRkJkMGhxUldOTlFtOUhRVEZWUlVGM2QxUldSMVo2WkVOQ1ZGbFhXbXhrU0d4UFdsaFJaMVZ0T1haa1JFRmxSbmN3ZVUxRVFYaE5SRVYzVFVSQmQwMUVRbUZHZHpBd1RVUkJlRTFFUlhkTlJFRjNUVVJDWVUxQ01IaEhla0ZhUW1kT1ZrSkJUVTFGYlVZd1pFZFdlbVJETldoaWJWSjVZakpzYTB4dFRuWmlWRU5EUVZOSmQwUlJXVXBMYjFwSmFIWmpUa0ZSUlVKQ1VVRkVaMmRGVUVGRVEwTkJVVzlEWjJkRlFrRkxiVlUzVldaaWNXUk9lVU5oTWsxa1owWlBjR2hIVVdaNU4zTnlSbUpoV1dFd2NGcFNaRkkwWmxObFRUSkpPR3RqTDIxd1lXUXdVSEkyVFROMmEwSmxibXAwTkhaaGJFeFpWSGxzWnpWNFJEVldUU3RIYUVWeVZHUldiM1J1Tlcxb1pGbEdUWFFyVW1OV1VDdE9MM0ZvSzFaeGVVUkpXR1E0VGxSQlZHRndMelpqV2t3d01tbFBMMGhyVms1ME5XVmxURGh1ZEU5WlNuSkVkVE5XUkRWd1dIaDZUVFpQTm1RMlRHNUZhMnhvYUV0RGFUZzFhekpGU1dkNGMyMW1SV0pFYmpsalEzTjFUVmhvTW5ReGJ6Y3djblUwTm14alQwTnJhMG92TDFkTE4zQnRhSEpaWkhoSVNsQnFTRTUwVkdWdGFubE9kbnBYZFZwNFFXdGhaeXRHZUhCMmRXbDVMMmRTWkV4MU4wWklaelJvYUcxVU0xQmlXR1kxTXk5MVJIRldSbVYzU0hoRFRTOWhOa0Z6UlVGU2VFcEtSRTlwUW14a1NIUndiRGh1YkVwbk1rRlNSRkpOUVZOVmVFZEZWek15WkRkVVJ6QkRRWGRGUVVGaFRrVk5SVWwzUkVGWlJGWlNNRlJCVVVndlFrRkpkMEZFUVdSQ1owNVdTRkpGUlVacVFWVm5hRXBvWkVoU2JHTXpVWFZaVnpWclkyMDVjRnBETldwaU1qQjNSWGRaUkZaU01HeENRWGQzUTJkWlNVdDNXVUpDVVZWSVFYZEZkMFJSV1VwTGIxcEphSFpqVGtGUlJVeENVVUZFWjJkRlFrRkpRVEZWU0U5a1VHazJhbE5rYWxGQ2NrcHhiRlo1VEdscmRXbHJha2ROYVhoNVNDdFhRWE5hUmpOcFEwbEhSV2xEV0VjdlJrcG9TRVEyUjNjNFpsZDJVamRTVWtZemVuWk9iV0p0WWxReFZFZEdXbE41UlVwWGJYTk5OWE5OYUd4V1ltdFNhQ3RYVVVkVUswbHNPRWRwVFdrME5VeGlRVUZsVjFOV2RHSkhUVzVOVmxCcVdYbFlNREpXVkVkeGNWUnpWemxzYzJsT1UzcGpZMFptUmxsb2FXTk1jMnh2VkU0emRIZExObGxPV2toV1JqRklPRXBwVVhSbU1VTlNUek0wVTFCVVRGaENkbGxrWkRWalVEZHNOMDl6V2xGVFl6QlJibWszY0VaaE4xcHBaVVVyVlRkeVV6ZE1RVTl6VlVaMmQxQldPSE1yZWxJek1raE1SRm92U21JMlJITmpabGhVUVVKbGNrcFBUVFZoUkZGTVZIZFZUR0pzVm1SeFUwTnRWV0pzUW01VVRXWnhUR05hYVVGTldFUm9ielZpY2twNFJqUkhjRmh3UWpKak5XcFdVQ3RZU0RScGMycG1XbWRKYzJkUE5uYzlJbDE5LmV5SnViMjVqWlNJNkltbENjMXA2VURWbmRpdG5hR3BZVEN0WlIzZFRTR1YyY1RJeU5uQXpUMEZpWTBOd1JEaG9TRzFSS3pnOUlpd2lkR2x0WlhOMFlXMXdUWE1pT2pFM01EQXdNREF3TURBd01EQXNJbUZ3YTFCaFkydGhaMlZPWVcxbElqb2lZMjl0TG1kdmIyZHNaUzVoYm1SeWIybGtMbWR0Y3lJc0ltRndhME5sY25ScFptbGpZWFJsUkdsblpYTjBVMmhoTWpVMklqcGJYU3dpWTNSelVISnZabWxzWlUxaGRHTm9JanAwY25WbExDSmlZWE5wWTBsdWRHVm5jbWwwZVNJNmRISjFaWDAuRjRnbmREckVmenFPNVcxMnF2RktSa0VJTmJRbV9MNnVmU0RsR05CNHhlMEhibk51eHgyMTRPUVZ1N2p6eUtGTklMczVzd2o5MkJUaDEwLWlSSmRGWF9pR3Q0NXRUdmF1VUJGeEYwc1BxQ0VzMHY2Q3VZRko0dGhuNjFYajJwTllHMmsxWVd4dDdVeEczYTZ3dTU4YURrWFJSalpIUjNUMU1PMFZWc19xVmgtYTl2VmRwWmJ0dkZBdlpxbkxuY2FNN1VacXhZZjFNc1JUOFpqVGlrd21KWTBlVzUtTjhUblkyR25NME54UENUS2M0cFpVQnp0WVlJRlBpZ0pQSFpiRHJCWDZ1RDR1Qm95amNpdDJXUHdfVDFhUEV1TEdydTYwVUtqSFdUU2x3enRtTzRNemVJd1BaM1NFMnBCZWhTeUI2WHkzeTJnOGdrN2l6YWd3OURqQW13aGF1dGhEYXRhWKSjeab27q-5pV43jBGANOJ1Hmgvq58tMKsT0hJVhs4ZR0UAAAAAuT_ZYfLmRi-xIoIAIkfeeAAg8N3jm7Km8RybO2seUWyGqXSj6mGGFURGcci0f3l0Ys-lAQIDJiABIVgg6rfRJ6KQcGRdGZntD46gXcwg5XaR0H9NO9Szj5shacQiWCDLFfW17Z0S4ymFFGjfhZA7zGZBlerc6dYgVwwF0R3LaQ";

pub const SAFETYNET_CLIENT_DATA_JSON: &str = "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiZ19FVHVKY3J3eEIyNmVrYkd2QjUxVEg5VkFiVlQtQ01veWU3b0E5UHJGUSIsIm9yaWdpbiI6Imh0dHBzOi8vZXhhbXBsZS5jb20iLCJjcm9zc09yaWdpbiI6ZmFsc2V9";

pub const SAFETYNET_NO_CTS_CHALLENGE: &str = "aZw_fCeEjbi9Hb9r1YbRhqXSjZ_J-5MWtAjo_yWYaYI";

pub const SAFETYNET_NO_CTS_CREDENTIAL_ID: &str = "_j5wjUe97zJfjV2MwkyodfyshvF8mv5i5FRpyhS8uEs";

pub const SAFETYNET_NO_CTS_ATTESTATION_OBJECT: &str = "o2NmbXRxYW5kcm9pZC1zYWZldHluZXRnYXR0U3RtdKJjdmVyaTIzMzAxMzA0NGhyZXNwb25zZVkH4GV5SmhiR2NpT2lKU1V6STFOaUlzSW5nMVl5STZXeUpOU1VsREszcERRMEZsVDJkQmQwbENRV2RKUTFWQlJYZEVVVmxLUzI5YVNXaDJZMDVCVVVWTVFsRkJkMGhxUldOTlFtOUhRVEZWUlVGM2QxUldSMVo2WkVOQ1ZGbFhXbXhrU0d4UFdsaFJaMVZ0T1haa1JFRmxSbmN3ZVUxRVFYaE5SRVYzVFVSQmQwMUVRbUZHZHpBd1RVUkJlRTFFUlhkTlJFRjNUVVJDWVUxQ01IaEhla0ZhUW1kT1ZrSkJUVTFGYlVZd1pFZFdlbVJETldoaWJWSjVZakpzYTB4dFRuWmlWRU5EUVZOSmQwUlJXVXBMYjFwSmFIWmpUa0ZSUlVKQ1VVRkVaMmRGVUVGRVEwTkJVVzlEWjJkRlFrRkxiVlUzVldaaWNXUk9lVU5oTWsxa1owWlBjR2hIVVdaNU4zTnlSbUpoV1dFd2NGcFNaRkkwWmxObFRUSkpPR3RqTDIxd1lXUXdVSEkyVFROMmEwSmxibXAwTkhaaGJFeFpWSGxzWnpWNFJEVldUU3RIYUVWeVZHUldiM1J1Tlcxb1pGbEdUWFFyVW1OV1VDdE9MM0ZvSzFaeGVVUkpXR1E0VGxSQlZHRndMelpqV2t3d01tbFBMMGhyVms1ME5XVmxURGh1ZEU5WlNuSkVkVE5XUkRWd1dIaDZUVFpQTm1RMlRHNUZhMnhvYUV0RGFUZzFhekpGU1dkNGMyMW1SV0pFYmpsalEzTjFUVmhvTW5ReGJ6Y3djblUwTm14alQwTnJhMG92TDFkTE4zQnRhSEpaWkhoSVNsQnFTRTUwVkdWdGFubE9kbnBYZFZwNFFXdGhaeXRHZUhCMmRXbDVMMmRTWkV4MU4wWklaelJvYUcxVU0xQmlXR1kxTXk5MVJIRldSbVYzU0hoRFRTOWhOa0Z6UlVGU2VFcEtSRTlwUW14a1NIUndiRGh1YkVwbk1rRlNSRkpOUVZOVmVFZEZWek15WkRkVVJ6QkRRWGRGUVVGaFRrVk5SVWwzUkVGWlJGWlNNRlJCVVVndlFrRkpkMEZFUVdSQ1owNVdTRkpGUlVacVFWVm5hRXBvWkVoU2JHTXpVWFZaVnpWclkyMDVjRnBETldwaU1qQjNSWGRaUkZaU01HeENRWGQzUTJkWlNVdDNXVUpDVVZWSVFYZEZkMFJSV1VwTGIxcEphSFpqVGtGUlJVeENVVUZFWjJkRlFrRkpRVEZWU0U5a1VHazJhbE5rYWxGQ2NrcHhiRlo1VEdscmRXbHJha2ROYVhoNVNDdFhRWE5hUmpOcFEwbEhSV2xEV0VjdlJrcG9TRVEyUjNjNFpsZDJVamRTVWtZemVuWk9iV0p0WWxReFZFZEdXbE41UlVwWGJYTk5OWE5OYUd4V1ltdFNhQ3RYVVVkVUswbHNPRWRwVFdrME5VeGlRVUZsVjFOV2RHSkhUVzVOVmxCcVdYbFlNREpXVkVkeGNWUnpWemxzYzJsT1UzcGpZMFptUmxsb2FXTk1jMnh2VkU0emRIZExObGxPV2toV1JqRklPRXBwVVhSbU1VTlNUek0wVTFCVVRGaENkbGxrWkRWalVEZHNOMDl6V2xGVFl6QlJibWszY0VaaE4xcHBaVVVyVlRkeVV6ZE1RVTl6VlVaMmQxQldPSE1yZWxJek1raE1SRm92U21JMlJITmpabGhVUVVKbGNrcFBUVFZoUkZGTVZIZFZUR0pzVm1SeFUwTnRWV0pzUW01VVRXWnhUR05hYVVGTldFUm9ielZpY2twNFJqUkhjRmh3UWpKak5XcFdVQ3RZU0RScGMycG1XbWRKYzJkUE5uYzlJbDE5LmV5SnViMjVqWlNJNklsWm5kMFJxY1dkT2RYRjFVVm9yY0V0amQyNWhSV3hoTmsxT1NYaDBNemhLTVU5WFJGVm9XazlVU2tVOUlpd2lkR2x0WlhOMFlXMXdUWE1pT2pFM01EQXdNREF3TURBd01EQXNJbUZ3YTFCaFkydGhaMlZPWVcxbElqb2lZMjl0TG1kdmIyZHNaUzVoYm1SeWIybGtMbWR0Y3lJc0ltRndhME5sY25ScFptbGpZWFJsUkdsblpYTjBVMmhoTWpVMklqcGJYU3dpWTNSelVISnZabWxzWlUxaGRHTm9JanBtWVd4elpTd2lZbUZ6YVdOSmJuUmxaM0pwZEhraU9uUnlkV1Y5LlNPRmhKYV9tSFhXTV9ydkV1REVhTzFXVGVhY19WNk1pd1g3d3dxdXdsMU5yN0xfMmRmNTlheVBXNUZRSzZJSmhRaFVTNkpzOUU4WFczc0ZjT19XOHIyMGotbW0xQ2h3VFNGdThuV3JWakZ6T0pTNzA0TW5GTVJRQ1JrNTdoS2xjdk5MVDJPUUkxSDUzZlJxc0lweE9YM2VubTNNYk5YTTZQTnd4Y1l0YV9XeG9aUGFNOVpOOEFiU3JFZjQxMFpSQVFhUHA3N3hYZWtSMnBqS19qTk5GMWc3X2RfUENQNWI1NTRYUzY2a2hIZnYyZThYV3dEV0NnVWlZX1oxQnNwVVdJNUtFNDRydGJrSEY5OFcxUVJkckxSVHFCSTZPWmlQQjM0T3dVT19wT1VQVko0VDB5VG5pOEk5anpkVmRRc1JmeUhHZlBUaHdMQ0JkWUtHRDBqZVJVZ2hhdXRoRGF0YViko3mm9u6vuaVeN4wRgDTidR5oL6ufLTCrE9ISVYbOGUdFAAAAALk_2WHy5kYvsSKCACJH3ngAIP4-cI1Hve8yX41djMJMqHX8rIbxfJr-YuRUacoUvLhLpQECAyYgASFYIKT4SW4PHgsmtmxaPhaekjRkwnkbOR11MPep0LJA0ZtUIlggIcu2VqgHoufB3zE--PZfWfxoyqXeuKyW8gUCIGuPNxU";

pub const SAFETYNET_NO_CTS_CLIENT_DATA_JSON: &str = "eyJ0eXBlIjoid2ViYXV0aG4uY3JlYXRlIiwiY2hhbGxlbmdlIjoiYVp3X2ZDZUVqYmk5SGI5cjFZYlJocVhTalpfSi01TVd0QWpvX3lXWWFZSSIsIm9yaWdpbiI6Imh0dHBzOi8vZXhhbXBsZS5jb20iLCJjcm9zc09yaWdpbiI6ZmFsc2V9";

/// RSA-2048 PKCS#8 key used to sign test messages.
pub const RSA_PRIVATE_KEY_PKCS8: &str = "MIIEvQIBADANBgkqhkiG9w0BAQEFAASCBKcwggSjAgEAAoIBAQDAQHOgP0X3d4ry-P7IBS-OB3t_VLLhZqTbkpxBwXl8xm71_IaQq71zUVwPDSJ8Dk_Ka8x573npH6dlFObeZu2sBdq6eK8tMUGy7R-34zcmIYY_lxl5torreUIviKAPvaFFez8jco5tbg56cvOD4PWxpksyX1xfB2nJLJbf2WiNSSIxHsfbqz7Www7dz8OzZONVdxlgpK064GM-ExrEa79YDZFxHFxzvb3U7ebnH--jhhgiDAqwXuzveIMENDtEICCbzO0nLU4wl7gM8d3Qq_UCJdX8xrY-zuFUUFztt3Z7YpSSbpfHogcszWxuZybWGggOi6PJKPj_O0Tyo5CklJQLAgMBAAECggEACH2wPacdwXjDp8iMhCwKdiTpdO26Os9MP7Bhe1v-sB6Zfv7IuLIFG4c_4CBN4hnFt2R8cvQ7N6sguwupyK_WFm9pwiubXQ0cYDkt2fLMmEAJzFwxkVkZGJ5R6ISJwTg4W7e-SaQBG18tf4X9MFlqsI5uKsrgawgKSYrRHRDel8LL3GQxWqJ8vrReOm6oGVgY7f7RTNcSYd2EODMVrwDV9xiIoioz2Qeccrg1FGVwZE1gofvNd32hH03ADXAWqHfo6ltTEUrBkAA45ocCR5QbJ5I0hNK9C_FVMzZy733BJ-Z3GqT3ciI5Cc7Z2Ld5jdmt18lNMKoTBT5X4myDKd2tcQKBgQD9sbiL7LNJXkM27uCdhSamKvMi-1hab3ATHgOGUMdXlUMeitGvzrw1e9AQ5FhlTth4KV-4QX-uznmS2p0anCxEKURwnXs9tBbZRIvpVG4zQTPaZ1LUddsFUaN3FSQixEUcW09nqlIltsf-P3fj6RLGQVfwmoFQmVsMf9CwthV9uwKBgQDB_8U-vBVVMaVkzCRNDTErViP5nCT9lbfbOliOYrQbWgeLBvEfxw925T3ezUT43SrHQKwET7s8dFItILB1SqN55cxUVHfWT9vBOHbdZNBU3SvRINx6YN14dpFKUr5XgTKyF4qM7VxWBubQtBotRc4a-lbyYNLB-Wlt7utSWBy18QKBgA9BcayQZlOiJH6YLM-sIx_Y81gGL1D45I9xvZqFHweoRSoABQ4Ca5T3xhJN-PbWn_PR4Ryua6QybGMlXE8uVwceSCxRfAjA3KLiGVvFpP7WC-01S2jVUX9nYmIV1l902AcVgpfkSR5VeH9Uh7wf1u4vHb-tOtuC7VO6F-2YdYBjAoGBAIFjU2y6CQhfKk6GERgK2mZq92d9ivZOqudejL26eyFa9Hj3Uk69d0T3NEKraXsKF4P5UEE35Es30a8jhE1WUJ32dEcyZxLbBFhkjnKu0HwpXxYF8sb0YAH-In0NnsHB-8voA5JmpRUDWWKNHIBhdEtt-BuEFE0nSff2R6EN_2ghAoGAY657wU3HqeJGvuSBerqc4jnJ-JBY_XLJOpOEtW253wDv_hZbWctRwRiG0e7PV_z4DwhseVoDbmbw2I5FVEBuZeV696ij9BzJO65eT0NvDtJ80_K-bSXHKcBjxc7n3U8HpZd-zFA2jmRNkzsCkf8vsHtPP_m0F_g200Gt_wUTjK0";
