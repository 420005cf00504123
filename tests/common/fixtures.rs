//! Reusable catalog fixtures.

/// Electronics has 7 products and one subcategory; Books has products
/// only; Empty has nothing.
pub const SHOP_JSON: &str = r#"{
  "categories": [
    {
      "id": "c1",
      "name": "Electronics",
      "products": [
        { "id": "p1", "name": "Gadget 1", "price": 19.5 },
        { "id": "p2", "name": "Gadget 2", "price": 19.5 },
        { "id": "p3", "name": "Gadget 3", "price": 19.5 },
        { "id": "p4", "name": "Gadget 4", "price": 19.5 },
        { "id": "p5", "name": "Gadget 5", "price": 19.5 },
        { "id": "p6", "name": "Gadget 6", "price": 19.5 },
        { "id": "p7", "name": "Gadget 7", "price": 19.5 }
      ],
      "subcategories": [
        {
          "id": "s1",
          "name": "Phones",
          "products": [{ "id": "p8", "name": "Case", "price": 9 }]
        }
      ]
    },
    {
      "id": "c2",
      "name": "Books",
      "products": [{ "id": "b1", "name": "Atlas", "price": 12.25 }]
    },
    { "id": "c3", "name": "Empty" }
  ]
}"#;

pub const SHOP_YAML: &str = r#"categories:
  - id: c1
    name: Garden
    sub_subcategories:
      - id: ss1
        name: Seeds
        products:
          - id: g1
            name: Tomato
            price: 2.5
"#;

pub const SHOP_TOML: &str = r#"[[categories]]
id = "c1"
name = "Tools"

[[categories.products]]
id = "t1"
name = "Hammer"
price = 15.0
"#;

/// Duplicate root id and a negative price
pub const BROKEN_JSON: &str = r#"[
  { "id": "c1", "name": "A", "products": [{ "id": "p1", "name": "X", "price": -1 }] },
  { "id": "c1", "name": "B" }
]"#;
