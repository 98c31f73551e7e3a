use restconf_fields::{
    DataNode, FieldsError, FieldsParser, QName, QNameModule, StaticSchemaContext,
};

fn main() -> Result<(), FieldsError> {
    let module = QNameModule::with_revision("http://example.com/ns/example-jukebox", "2015-04-04");
    let jukebox = DataNode::container(QName::new(module.clone(), "jukebox"))
        .with_child(
            DataNode::container(QName::new(module.clone(), "library")).with_child(
                DataNode::list(QName::new(module.clone(), "album"))
                    .with_child(DataNode::leaf(QName::new(module.clone(), "name")))
                    .with_child(DataNode::leaf(QName::new(module.clone(), "genre"))),
            ),
        )
        .with_child(DataNode::container(QName::new(module, "player")));

    let context = StaticSchemaContext::new();
    let parser = FieldsParser::new(&context);
    let levels = parser.parse(&jukebox, "library(album(name;genre));player")?;

    for (depth, group) in levels.iter().enumerate() {
        let names = group
            .iter()
            .map(|qname| qname.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        println!("{}: {}", depth, names);
    }

    Ok(())
}
