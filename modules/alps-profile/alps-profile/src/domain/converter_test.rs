#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::infra::{BundleMessageSource, InMemoryCatalog};
    use alps_profile_sdk::{
        AssociationMetadata, DescriptionRef, Descriptor, DescriptorType, EntityMetadata,
        EntityType, MessageSource, PaginationVariable, PropertyMapping, PropertyMetadata,
        ResourceMetadata, SearchMapping,
    };
    use std::collections::HashMap;
    use std::sync::Arc;

    fn property(name: &str) -> PropertyMetadata {
        PropertyMetadata {
            name: name.to_owned(),
            description: DescriptionRef::default(),
        }
    }

    fn mapped(name: &str, rel: &str, text: &str) -> (String, PropertyMapping) {
        (
            name.to_owned(),
            PropertyMapping {
                rel: rel.to_owned(),
                description: DescriptionRef::new(format!("rest.description.person.{name}"), text),
            },
        )
    }

    fn person(paging: bool) -> EntityMetadata {
        EntityMetadata {
            entity_type: EntityType::new("com.acme.Person"),
            properties: vec![property("firstName"), property("lastName")],
            associations: vec![],
            supports_paging: paging,
            pagination_variables: if paging {
                PaginationVariable::standard()
            } else {
                vec![]
            },
        }
    }

    fn person_mapping() -> ResourceMetadata {
        ResourceMetadata {
            collection_rel: "people".to_owned(),
            collection_description: DescriptionRef::new("rest.description.people", "All people"),
            item_rel: "person".to_owned(),
            item_description: DescriptionRef::new("rest.description.person", "A person"),
            properties: vec![
                mapped("firstName", "first-name", "Given name"),
                mapped("lastName", "last-name", ""),
                mapped("address", "address", "Home address"),
            ],
            search_mappings: vec![SearchMapping {
                rel: "findByLastName".to_owned(),
                parameter_names: vec!["lastName".to_owned()],
            }],
        }
    }

    fn converter_with(
        entity: &EntityMetadata,
        mapping: ResourceMetadata,
        messages: Arc<dyn MessageSource>,
    ) -> AlpsDescriptorConverter {
        let mut catalog = InMemoryCatalog::new();
        catalog.register(entity.clone(), mapping).unwrap();
        AlpsDescriptorConverter::new(Arc::new(catalog), messages)
    }

    fn converter(entity: &EntityMetadata, mapping: ResourceMetadata) -> AlpsDescriptorConverter {
        converter_with(
            entity,
            mapping,
            Arc::new(alps_profile_sdk::DefaultMessageSource),
        )
    }

    fn names(descriptors: &[Descriptor]) -> Vec<&str> {
        descriptors.iter().filter_map(Descriptor::name).collect()
    }

    #[test]
    fn group_is_collection_then_item_then_searches() {
        let entity = person(true);
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        assert_eq!(alps.version, "1.0");
        assert_eq!(names(&alps.descriptors), ["people", "person", "findByLastName"]);
        assert!(
            alps.descriptors
                .iter()
                .all(|d| d.descriptor_type() == DescriptorType::Safe)
        );
    }

    #[test]
    fn single_resource_lists_properties_with_mapped_rels() {
        let entity = person(false);
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        let item = alps.descriptor("person").unwrap();
        assert_eq!(item.doc().unwrap().value, "A person");
        assert_eq!(names(item.descriptors()), ["first-name", "last-name"]);

        let first = item.child("first-name").unwrap();
        assert_eq!(first.descriptor_type(), DescriptorType::Semantic);
        assert_eq!(first.doc().unwrap().value, "Given name");
        assert!(first.descriptors().is_empty());

        // Empty description text leaves the descriptor undocumented.
        assert!(item.child("last-name").unwrap().doc().is_none());
    }

    #[test]
    fn type_without_properties_has_empty_item() {
        let mut entity = person(false);
        entity.properties.clear();
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        assert!(alps.descriptor("person").unwrap().descriptors().is_empty());
    }

    #[test]
    fn paged_collection_carries_pagination_variables() {
        let entity = person(true);
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        let collection = alps.descriptor("people").unwrap();
        assert_eq!(collection.doc().unwrap().value, "All people");
        assert_eq!(names(collection.descriptors()), ["page", "size", "sort"]);

        let page = collection.child("page").unwrap();
        assert_eq!(page.descriptor_type(), DescriptorType::Semantic);
        assert_eq!(page.doc().unwrap().value, "The page to return.");
    }

    #[test]
    fn unpaged_collection_has_no_children() {
        let mut entity = person(false);
        // Variables are ignored unless the type pages.
        entity.pagination_variables = PaginationVariable::standard();
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        assert!(alps.descriptor("people").unwrap().descriptors().is_empty());
    }

    #[test]
    fn associations_follow_properties() {
        let mut entity = person(false);
        entity.associations = vec![AssociationMetadata {
            inverse_property: "address".to_owned(),
        }];
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        let item = alps.descriptor("person").unwrap();
        assert_eq!(names(item.descriptors()), ["first-name", "last-name", "address"]);

        let address = item.child("address").unwrap();
        assert_eq!(address.descriptor_type(), DescriptorType::Safe);
        assert_eq!(address.doc().unwrap().value, "Home address");
    }

    #[test]
    fn search_resource_has_semantic_parameters_without_docs() {
        let entity = person(false);
        let alps = converter(&entity, person_mapping()).convert(&entity).unwrap();

        let search = alps.descriptor("findByLastName").unwrap();
        assert!(search.doc().is_none());
        assert_eq!(names(search.descriptors()), ["lastName"]);

        let param = &search.descriptors()[0];
        assert_eq!(param.descriptor_type(), DescriptorType::Semantic);
        assert!(param.doc().is_none());
    }

    #[test]
    fn parameterless_search_has_no_children() {
        let entity = person(false);
        let mut mapping = person_mapping();
        mapping.search_mappings = vec![
            SearchMapping {
                rel: "findAll".to_owned(),
                parameter_names: vec![],
            },
            SearchMapping {
                rel: "findByName".to_owned(),
                parameter_names: vec!["first".to_owned(), "last".to_owned()],
            },
        ];
        let alps = converter(&entity, mapping).convert(&entity).unwrap();

        assert_eq!(names(&alps.descriptors), ["people", "person", "findAll", "findByName"]);
        assert!(alps.descriptor("findAll").unwrap().descriptors().is_empty());
        assert_eq!(
            names(alps.descriptor("findByName").unwrap().descriptors()),
            ["first", "last"]
        );
    }

    #[test]
    fn unmapped_property_is_a_configuration_error() {
        let mut entity = person(false);
        entity.properties.push(property("age"));
        let err = converter(&entity, person_mapping())
            .convert(&entity)
            .unwrap_err();

        assert!(err.is_configuration());
        assert!(matches!(
            err,
            DomainError::MissingPropertyMapping { ref property, .. } if property == "age"
        ));
    }

    #[test]
    fn unmapped_association_is_a_configuration_error() {
        let mut entity = person(false);
        entity.associations = vec![AssociationMetadata {
            inverse_property: "employer".to_owned(),
        }];
        let err = converter(&entity, person_mapping())
            .convert(&entity)
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingAssociationMapping { .. }));
    }

    #[test]
    fn unmapped_type_is_a_configuration_error() {
        let entity = person(false);
        let converter = AlpsDescriptorConverter::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(alps_profile_sdk::DefaultMessageSource),
        );

        let err = converter.convert(&entity).unwrap_err();
        assert!(matches!(err, DomainError::MissingResourceMapping { .. }));
    }

    #[test]
    fn unnamed_search_parameter_is_rejected() {
        let entity = person(false);
        let mut mapping = person_mapping();
        mapping.search_mappings[0].parameter_names = vec![String::new()];

        let err = converter(&entity, mapping).convert(&entity).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnnamedSearchParameter { ref rel, .. } if rel == "findByLastName"
        ));
    }

    #[test]
    fn empty_property_rel_is_a_configuration_error() {
        let entity = person(false);
        let mut mapping = person_mapping();
        mapping.properties[0].1.rel = String::new();

        let err = converter(&entity, mapping).convert(&entity).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(
            err,
            DomainError::EmptyRelation { ref element, .. } if element.contains("firstName")
        ));
    }

    #[test]
    fn empty_association_rel_is_a_configuration_error() {
        let mut entity = person(false);
        entity.associations = vec![AssociationMetadata {
            inverse_property: "address".to_owned(),
        }];
        let mut mapping = person_mapping();
        mapping.properties[2].1.rel = String::new();

        let err = converter(&entity, mapping).convert(&entity).unwrap_err();
        assert!(matches!(
            err,
            DomainError::EmptyRelation { ref element, .. } if element.contains("address")
        ));
    }

    #[test]
    fn empty_search_rel_is_a_configuration_error() {
        let entity = person(false);
        let mut mapping = person_mapping();
        mapping.search_mappings[0].rel = String::new();

        let err = converter(&entity, mapping).convert(&entity).unwrap_err();
        assert!(matches!(
            err,
            DomainError::EmptyRelation { ref element, .. } if element == "search"
        ));
    }

    #[test]
    fn descriptions_resolve_through_locale_bundles() {
        let entity = person(false);
        let bundles = HashMap::from([(
            "de".to_owned(),
            HashMap::from([
                ("rest.description.person".to_owned(), "Eine Person".to_owned()),
                (
                    "rest.description.person.firstName".to_owned(),
                    "Vorname".to_owned(),
                ),
            ]),
        )]);
        let converter = converter_with(
            &entity,
            person_mapping(),
            Arc::new(BundleMessageSource::new(bundles, "de_DE")),
        );

        let alps = converter.convert(&entity).unwrap();
        let item = alps.descriptor("person").unwrap();
        assert_eq!(item.doc().unwrap().value, "Eine Person");
        assert_eq!(item.child("first-name").unwrap().doc().unwrap().value, "Vorname");
        // No bundle entry: default text.
        assert_eq!(alps.descriptor("people").unwrap().doc().unwrap().value, "All people");
    }

    #[test]
    fn conversion_is_deterministic() {
        let entity = person(true);
        let converter = converter(&entity, person_mapping());
        assert_eq!(
            converter.convert(&entity).unwrap(),
            converter.convert(&entity).unwrap()
        );
    }
}
