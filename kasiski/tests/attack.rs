use kasiski::alphabet::{LATIN, SPANISH};
use kasiski::cipher::strip_to_alphabet;
use kasiski::fixtures::{self, DEFAULT_PREFIX};
use kasiski::{
    break_cipher, decrypt, encrypt, sha256_hex, Alphabet, AttackConfig, AttackInput,
    AttackOutcome,
};
use tempfile::TempDir;

const ENGLISH_TEXT: &str = "MARK LIVES IN A SMALL TOWN SURROUNDED BY FORESTS AND LAKES HE \
    ENJOYS HIKING THROUGH THE WOODS AND KAYAKING ON THE WATER EVERY WEEKEND HIS DOG BUDDY \
    JOINS HIM ON THESE ADVENTURES THEY SPEND HOURS EXPLORING THE NATURAL TRAILS AND \
    WATCHING WILDLIFE IT GIVES MARK A SENSE OF PEACE AND CONNECTS HIM TO NATURE BUDDY \
    SEEMS TO LOVE THESE TRIPS JUST AS MUCH AS MARK DOES TOGETHER THEY HAVE MADE COUNTLESS \
    MEMORIES IN THE GREAT OUTDOORS";

const SPANISH_TEXT: &str = "EN UN LUGAR DE LA MANCHA DE CUYO NOMBRE NO QUIERO ACORDARME NO \
    HA MUCHO TIEMPO QUE VIVIA UN HIDALGO DE LOS DE LANZA EN ASTILLERO ADARGA ANTIGUA ROCIN \
    FLACO Y GALGO CORREDOR UNA OLLA DE ALGO MAS VACA QUE CARNERO SALPICON LAS MAS NOCHES \
    DUELOS Y QUEBRANTOS LOS SABADOS LANTEJAS LOS VIERNES ALGUN PALOMINO DE AÑADIDURA LOS \
    DOMINGOS CONSUMIAN LAS TRES PARTES DE SU HACIENDA EL RESTO DELLA CONCLUIAN SAYO DE \
    VELARTE CALZAS DE VELLUDO PARA LAS FIESTAS CON SUS PANTUFLOS DE LO MISMO";

#[test]
fn test_standard_vigenere_vector_verifies() {
    let alphabet = Alphabet::new(LATIN).unwrap();
    let ciphertext = encrypt("ATTACKATDAWN", "KEY", &alphabet).unwrap();
    assert_eq!(ciphertext, "KXRKGIKXBKAL");

    let plaintext = decrypt(&ciphertext, "KEY", &alphabet).unwrap();
    assert_eq!(sha256_hex(&plaintext), sha256_hex("ATTACKATDAWN"));
}

#[test]
fn test_generated_fixture_round_trip() {
    let dir = TempDir::new().unwrap();
    let alphabet = Alphabet::new(LATIN).unwrap();
    let plaintext = strip_to_alphabet(ENGLISH_TEXT, &alphabet);
    let ciphertext = encrypt(&plaintext, "SUNLIGHT", &alphabet).unwrap();

    fixtures::write_fixture(
        dir.path(),
        DEFAULT_PREFIX,
        &ciphertext,
        LATIN,
        &sha256_hex(&plaintext),
    )
    .unwrap();

    let discovered = fixtures::discover(dir.path()).unwrap();
    assert_eq!(discovered.len(), 1);

    let input = discovered[0].load().unwrap();
    let outcome = break_cipher(&input, &AttackConfig::default()).unwrap();
    assert_eq!(outcome.key(), Some("SUNLIGHT"));
}

#[test]
fn test_spaces_pass_through() {
    let alphabet = Alphabet::new(LATIN).unwrap();
    let ciphertext = encrypt(ENGLISH_TEXT, "SUNLIGHT", &alphabet).unwrap();
    let input = AttackInput::new(&ciphertext, LATIN, &sha256_hex(ENGLISH_TEXT)).unwrap();

    match break_cipher(&input, &AttackConfig::default()).unwrap() {
        AttackOutcome::Found(recovery) => {
            assert_eq!(recovery.key, "SUNLIGHT");
            assert_eq!(recovery.language, "ENG");
        }
        other => panic!("expected a key, got {:?}", other),
    }
}

#[test]
fn test_spanish_alphabet_with_enye() {
    let alphabet = Alphabet::new(SPANISH).unwrap();
    let plaintext = strip_to_alphabet(SPANISH_TEXT, &alphabet);
    let digest = sha256_hex(&plaintext);

    for key in ["CASTILLO", "ÑANDU"] {
        let ciphertext = encrypt(&plaintext, key, &alphabet).unwrap();
        let input = AttackInput::new(&ciphertext, SPANISH, &digest).unwrap();

        match break_cipher(&input, &AttackConfig::default()).unwrap() {
            AttackOutcome::Found(recovery) => {
                assert_eq!(recovery.key, key);
                assert_eq!(recovery.language, "SPN");
            }
            other => panic!("expected {}, got {:?}", key, other),
        }
    }
}

#[test]
fn test_lowercase_inputs_are_normalized() {
    let alphabet = Alphabet::new(LATIN).unwrap();
    let plaintext = strip_to_alphabet(ENGLISH_TEXT, &alphabet);
    let ciphertext = encrypt(&plaintext, "SUNLIGHT", &alphabet).unwrap();

    let input = AttackInput::new(
        &ciphertext.to_lowercase(),
        &LATIN.to_lowercase(),
        &sha256_hex(&plaintext).to_uppercase(),
    )
    .unwrap();

    let outcome = break_cipher(&input, &AttackConfig::default()).unwrap();
    assert_eq!(outcome.key(), Some("SUNLIGHT"));
}
