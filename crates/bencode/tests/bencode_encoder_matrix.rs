use serde_json::json;
use torrent_bencode::{decode, encode, BencodeEncoder, BencodeError, Integer, Value};

fn dict(fields: &[(&str, Value)]) -> Value {
    Value::Dictionary(
        fields
            .iter()
            .map(|(k, v)| (k.as_bytes().to_vec(), v.clone()))
            .collect(),
    )
}

fn str_list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::from(*s)).collect())
}

#[test]
fn bencode_encoder_wire_matrix() {
    let mut encoder = BencodeEncoder::new();

    assert_eq!(encoder.encode(&Value::from(0i64)), b"i0e");
    assert_eq!(encoder.encode(&Value::from(1i64)), b"i1e");
    assert_eq!(encoder.encode(&Value::from(-1i64)), b"i-1e");
    assert_eq!(encoder.encode(&Value::from(i64::MIN)), b"i-9223372036854775808e");
    assert_eq!(
        encoder.encode(&Value::Integer(Integer::Unsigned(u64::MAX))),
        b"i18446744073709551615e"
    );

    assert_eq!(encoder.encode(&Value::from("")), b"0:");
    assert_eq!(encoder.encode(&Value::from("abc")), b"3:abc");
    assert_eq!(encoder.encode(&Value::from("✅")), b"3:\xE2\x9C\x85");
    assert_eq!(encoder.encode(&Value::from(vec![0u8; 10])), {
        let mut expected = b"10:".to_vec();
        expected.extend_from_slice(&[0u8; 10]);
        expected
    });

    assert_eq!(encoder.encode(&Value::List(vec![])), b"le");
    assert_eq!(
        encoder.encode(&Value::List(vec![Value::from(1i64), Value::from(2i64)])),
        b"li1ei2ee"
    );
    assert_eq!(encoder.encode(&dict(&[])), b"de");
    assert_eq!(
        encoder.encode(&dict(&[
            ("foo", Value::from("bar")),
            ("baz", Value::from(123i64)),
        ])),
        b"d3:bazi123e3:foo3:bare"
    );
}

#[test]
fn canonical_key_order() {
    let forward = dict(&[
        ("announce", Value::from("a")),
        ("comment", Value::from("c")),
        ("info", dict(&[("length", Value::from(1i64)), ("name", Value::from("n"))])),
    ]);
    let backward = dict(&[
        ("info", dict(&[("name", Value::from("n")), ("length", Value::from(1i64))])),
        ("comment", Value::from("c")),
        ("announce", Value::from("a")),
    ]);

    let a = encode(&forward);
    let b = encode(&backward);
    assert_eq!(a, b);
    assert_eq!(a, b"d8:announce1:a7:comment1:c4:infod6:lengthi1e4:name1:nee");
}

#[test]
fn ubuntu_metainfo_encodes_canonically() {
    let info = dict(&[
        ("length", Value::from(3_116_482_560i64)),
        ("name", Value::from("ubuntu-21.10-desktop-amd64.iso")),
        ("piece length", Value::from(262_144i64)),
        ("pieces", Value::from("earls")),
    ]);
    let root = dict(&[
        ("announce", Value::from("https://torrent.ubuntu.com/announce")),
        (
            "announce-list",
            Value::List(vec![
                str_list(&["https://torrent.ubuntu.com/announce"]),
                str_list(&["https://ipv6.torrent.ubuntu.com/announce"]),
            ]),
        ),
        ("comment", Value::from("Ubuntu CD releases.ubuntu.com")),
        ("created by", Value::from("mktorrent 1.1")),
        ("creation date", Value::from(1_634_219_565i64)),
        ("info", info),
    ]);

    let expected: &[u8] = b"d8:announce35:https://torrent.ubuntu.com/announce13:announce-listll35:https://torrent.ubuntu.com/announceel40:https://ipv6.torrent.ubuntu.com/announceee7:comment29:Ubuntu CD releases.ubuntu.com10:created by13:mktorrent 1.113:creation datei1634219565e4:infod6:lengthi3116482560e4:name30:ubuntu-21.10-desktop-amd64.iso12:piece lengthi262144e6:pieces5:earlsee";
    assert_eq!(encode(&root), expected);

    let decoded = decode(expected).unwrap();
    assert_eq!(Value::Dictionary(decoded), root);
}

#[test]
fn bencode_automated_roundtrip_matrix() {
    let docs = vec![
        Value::from(0i64),
        Value::from(12_345i64),
        Value::from(-4_444_444_444_444_444i64),
        Value::from(u64::MAX),
        Value::from(""),
        Value::from("hello"),
        Value::from(vec![0xffu8, 0x00, b'd', b'e']),
        Value::List(vec![]),
        dict(&[]),
        Value::List(vec![Value::List(vec![Value::List(vec![])])]),
        Value::List(vec![
            Value::from(1i64),
            Value::List(vec![
                Value::from(1i64),
                Value::List(vec![Value::from(1i64)]),
                Value::from(1i64),
            ]),
            Value::from(1i64),
        ]),
        dict(&[(
            "a",
            dict(&[("b", dict(&[("c", dict(&[("foo", Value::from("bar"))]))]))]),
        )]),
    ];

    for doc in docs {
        let wrapped = dict(&[("v", doc.clone())]);
        let encoded = encode(&wrapped);
        let decoded = decode(encoded.as_slice())
            .unwrap_or_else(|e| panic!("decode failed for {doc:?}: {e}"));
        assert_eq!(Value::Dictionary(decoded), wrapped);
    }
}

#[test]
fn json_bridge() {
    let mut encoder = BencodeEncoder::new();

    assert_eq!(
        encoder
            .encode_json(&json!({"foo": "bar", "baz": [1, -2, 18446744073709551615u64]}))
            .unwrap(),
        b"d3:bazli1ei-2ei18446744073709551615ee3:foo3:bare"
    );
    assert_eq!(encoder.encode_json(&json!("spam")).unwrap(), b"4:spam");

    assert!(matches!(
        encoder.encode_json(&json!(null)),
        Err(BencodeError::UnsupportedValue("null"))
    ));
    assert!(matches!(
        encoder.encode_json(&json!({"private": true})),
        Err(BencodeError::UnsupportedValue("boolean"))
    ));
    assert!(matches!(
        encoder.encode_json(&json!([0.5])),
        Err(BencodeError::UnsupportedValue(_))
    ));

    // The JSON path and the Value path agree.
    let doc = json!({"info": {"name": "x", "length": 7}, "announce": "u"});
    let value = Value::try_from(&doc).unwrap();
    assert_eq!(encoder.encode_json(&doc).unwrap(), encoder.encode(&value));
    assert_eq!(value.to_json(), Some(doc));
}

#[test]
fn dictionary_built_from_decode_reencodes_after_edit() {
    let mut root = decode(&b"d4:name1:x6:lengthi7ee"[..]).unwrap();
    root.insert(b"comment".to_vec(), Value::from("added"));
    assert_eq!(
        encode(&Value::Dictionary(root)),
        b"d7:comment5:added6:lengthi7e4:name1:xe"
    );
}
