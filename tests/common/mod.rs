#![allow(dead_code)]

use lazy_static::lazy_static;
use restconf_fields::{DataNode, QName, QNameModule, StaticSchemaContext};

pub fn jukebox_module() -> QNameModule {
    QNameModule::with_revision("http://example.com/ns/example-jukebox", "2015-04-04")
}

pub fn augmented_module() -> QNameModule {
    QNameModule::with_revision("http://example.com/ns/augmented-jukebox", "2016-05-05")
}

pub fn services_module() -> QNameModule {
    QNameModule::with_revision("tests:test-services", "2019-03-25")
}

pub fn jukebox_qname(name: &str) -> QName {
    QName::new(jukebox_module(), name)
}

pub fn augmented_qname(name: &str) -> QName {
    QName::new(augmented_module(), name)
}

pub fn services_qname(name: &str) -> QName {
    QName::new(services_module(), name)
}

lazy_static! {
    /// container jukebox { container library { list album { leaf name } }
    /// container player }, augmented by container augmented-library from a
    /// second module.
    pub static ref JUKEBOX: DataNode = DataNode::container(jukebox_qname("jukebox"))
        .with_child(
            DataNode::container(jukebox_qname("library")).with_child(
                DataNode::list(jukebox_qname("album"))
                    .with_child(DataNode::leaf(jukebox_qname("name"))),
            ),
        )
        .with_child(DataNode::container(jukebox_qname("player")))
        .with_child(DataNode::container(augmented_qname("augmented-library")));

    pub static ref JUKEBOX_CONTEXT: StaticSchemaContext =
        StaticSchemaContext::new().with_module("augmented-jukebox", augmented_module());

    /// container test-data { list services { leaf type-of-service;
    /// list instance { leaf instance-name; leaf provider }
    /// container next-data { leaf next-service } } }
    pub static ref TEST_DATA: DataNode = DataNode::container(services_qname("test-data"))
        .with_child(
            DataNode::list(services_qname("services"))
                .with_child(DataNode::leaf(services_qname("type-of-service")))
                .with_child(
                    DataNode::list(services_qname("instance"))
                        .with_child(DataNode::leaf(services_qname("instance-name")))
                        .with_child(DataNode::leaf(services_qname("provider"))),
                )
                .with_child(
                    DataNode::container(services_qname("next-data"))
                        .with_child(DataNode::leaf(services_qname("next-service"))),
                ),
        );

    pub static ref SERVICES_CONTEXT: StaticSchemaContext = StaticSchemaContext::new();
}
