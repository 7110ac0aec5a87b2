//! End-to-end documentation of whole modules.

#[cfg(test)]
mod tests {
    use crate::config::DocgenConfig;
    use crate::error::DocgenError;
    use crate::finder::Resolver;
    use crate::handlers::HandlerKind;
    use crate::importer::{IgnoreImporter, MapImporter};
    use crate::{parse, parse_with_context};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn document(source: &str) -> Vec<Value> {
        parse(source, &DocgenConfig::default(), &IgnoreImporter)
            .unwrap()
            .iter()
            .map(|doc| doc.to_object())
            .collect()
    }

    #[test]
    fn test_class_component() {
        let source = r#"
import React from 'react';
import PropTypes from 'prop-types';

/**
 * A button.
 */
export default class Button extends React.Component {
  static propTypes = {
    /** Label text. */
    label: PropTypes.string.isRequired,
    size: PropTypes.oneOf(['sm', 'lg']),
  };

  static defaultProps = {
    size: 'sm',
  };

  /**
   * Focus the button.
   */
  focus() {}

  render() {
    return <button>{this.props.label}</button>;
  }
}
"#;
        let docs = document(source);
        assert_eq!(docs.len(), 1);
        assert_eq!(
            docs[0],
            json!({
                "description": "A button.",
                "displayName": "Button",
                "methods": [{
                    "name": "focus",
                    "docblock": "Focus the button.",
                    "modifiers": [],
                    "params": [],
                    "description": "Focus the button."
                }],
                "props": {
                    "label": {
                        "type": {"name": "string"},
                        "required": true,
                        "description": "Label text."
                    },
                    "size": {
                        "type": {
                            "name": "enum",
                            "value": [
                                {"value": "'sm'", "computed": false},
                                {"value": "'lg'", "computed": false}
                            ]
                        },
                        "required": false,
                        "description": "",
                        "defaultValue": {"value": "'sm'", "computed": false}
                    }
                }
            })
        );
    }

    #[test]
    fn test_typescript_function_component() {
        let source = r#"
type Props = {
  /** Visible text. */
  label: string;
  size?: 'sm' | 'lg';
};

/** Tag. */
export function Tag({label, size = 'sm'}: Props) {
  return <span>{label}</span>;
}
"#;
        let docs = document(source);
        assert_eq!(
            docs[0],
            json!({
                "description": "Tag.",
                "displayName": "Tag",
                "props": {
                    "label": {
                        "tsType": {"name": "string"},
                        "required": true,
                        "description": "Visible text."
                    },
                    "size": {
                        "tsType": {
                            "name": "union",
                            "elements": [
                                {"name": "literal", "value": "'sm'"},
                                {"name": "literal", "value": "'lg'"}
                            ],
                            "raw": "'sm' | 'lg'"
                        },
                        "required": false,
                        "description": "",
                        "defaultValue": {"value": "'sm'", "computed": false}
                    }
                }
            })
        );
    }

    #[test]
    fn test_default_with_type_is_not_required() {
        let source = r#"
type Props = { size: string };
export const Tag = ({size = 'md'}: Props) => <i>{size}</i>;
"#;
        let docs = document(source);
        assert_eq!(docs[0]["props"]["size"]["required"], json!(false));
        assert_eq!(docs[0]["displayName"], json!("Tag"));
    }

    #[test]
    fn test_create_class_module() {
        let source = r#"
var createReactClass = require('create-react-class');
var PropTypes = require('prop-types');
var shared = require('./shared');
import {noop} from './utils';

/**
 * Legacy component.
 */
var Legacy = createReactClass({
  displayName: 'Legacy',
  propTypes: {
    ...shared.propTypes,
    onClick: PropTypes.func,
  },
  getDefaultProps: function() {
    return {onClick: noop};
  },
  /**
   * Focus the input.
   * @param {boolean} select Whether to select.
   */
  focus: function(select) {},
  render: function() { return null; },
});

module.exports = Legacy;
"#;
        let docs = document(source);
        assert_eq!(docs.len(), 1);
        let doc = &docs[0];
        assert_eq!(doc["description"], json!("Legacy component."));
        assert_eq!(doc["displayName"], json!("Legacy"));
        assert_eq!(doc["composes"], json!(["./shared"]));
        assert_eq!(
            doc["props"]["onClick"],
            json!({
                "type": {"name": "func"},
                "required": false,
                "description": "",
                "defaultValue": {"value": "noop", "computed": true}
            })
        );
        assert_eq!(
            doc["methods"],
            json!([{
                "name": "focus",
                "docblock": "Focus the input.\n@param {boolean} select Whether to select.",
                "modifiers": [],
                "params": [{
                    "name": "select",
                    "optional": false,
                    "type": {"name": "boolean"},
                    "description": "Whether to select."
                }],
                "description": "Focus the input."
            }])
        );
    }

    #[test]
    fn test_flow_class_props() {
        let source = r#"// @flow
import * as React from 'react';

type Props = {
  /** Shown label. */
  label: string,
  count?: number,
};

export default class Counter extends React.Component<Props> {
  render() { return null; }
}
"#;
        let docs = document(source);
        assert_eq!(
            docs[0]["props"],
            json!({
                "label": {"flowType": {"name": "string"}, "required": true, "description": "Shown label."},
                "count": {"flowType": {"name": "number"}, "required": false, "description": ""}
            })
        );
        assert_eq!(docs[0]["displayName"], json!("Counter"));
    }

    #[test]
    fn test_method_modifiers_and_types() {
        let source = r#"
import React from 'react';
export class Field extends React.Component {
  static create(value: string, strict?: boolean): Field { return new Field(); }
  async save() {}
  render() { return null; }
}
"#;
        let docs = document(source);
        let methods = &docs[0]["methods"];
        assert_eq!(methods[0]["name"], json!("create"));
        assert_eq!(methods[0]["modifiers"], json!(["static"]));
        assert_eq!(
            methods[0]["params"],
            json!([
                {"name": "value", "optional": false, "type": {"name": "string"}},
                {"name": "strict", "optional": true, "type": {"name": "boolean"}}
            ])
        );
        assert_eq!(methods[0]["returns"], json!({"type": {"name": "Field"}}));
        assert_eq!(methods[1]["modifiers"], json!(["async"]));
    }

    #[test]
    fn test_wrapped_export() {
        let source = r#"
import React from 'react';
function Inner() { return <div />; }
export default React.memo(Inner);
"#;
        let docs = document(source);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["displayName"], json!("Inner"));
    }

    #[test]
    fn test_class_with_static_assignments() {
        let source = r#"
import React from 'react';
import PropTypes from 'prop-types';
export default class Foo extends React.Component {
  render() { return <div />; }
}
Foo.propTypes = {a: PropTypes.string};
Foo.defaultProps = {a: 'x'};
Foo.displayName = 'Bar';
"#;
        let docs = document(source);
        assert_eq!(docs[0]["displayName"], json!("Bar"));
        assert_eq!(
            docs[0]["props"]["a"],
            json!({
                "type": {"name": "string"},
                "required": false,
                "description": "",
                "defaultValue": {"value": "'x'", "computed": false}
            })
        );
    }

    #[test]
    fn test_class_body_wins_over_static_assignment() {
        let source = r#"
import React from 'react';
export default class Foo extends React.Component {
  static displayName = 'Inside';
  render() { return <div />; }
}
Foo.displayName = 'Outside';
"#;
        assert_eq!(document(source)[0]["displayName"], json!("Inside"));
    }

    #[test]
    fn test_forward_ref_with_static_assignment() {
        let source = r#"
import React, {forwardRef} from 'react';
import PropTypes from 'prop-types';
const Foo = forwardRef((props, ref) => <div ref={ref} />);
Foo.propTypes = {a: PropTypes.string};
export default Foo;
"#;
        let docs = document(source);
        assert_eq!(docs[0]["displayName"], json!("Foo"));
        assert_eq!(docs[0]["props"]["a"]["type"], json!({"name": "string"}));
    }

    #[test]
    fn test_flow_props_with_spread() {
        let source = r#"// @flow
type Base = {
  /** From the base. */
  a: string,
};
type Props = {...Base, b?: number};
export function Foo(props: Props) { return <div />; }
"#;
        let docs = document(source);
        let props = docs[0]["props"].as_object().unwrap();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            props["a"],
            json!({"flowType": {"name": "string"}, "required": true, "description": "From the base."})
        );
        assert_eq!(props["b"]["required"], json!(false));
    }

    #[test]
    fn test_component_from_imported_prop_types() {
        let importer = MapImporter::new()
            .with_module("./props", "import PropTypes from 'prop-types';\nexport default {size: PropTypes.number};")
            .unwrap();
        let source = r#"
import propTypes from './props';
export function Box() { return <div />; }
Box.propTypes = propTypes;
"#;
        let docs = parse(source, &DocgenConfig::default(), &importer).unwrap();
        let size = docs[0].props.get("size").unwrap();
        assert_eq!(size.prop_type.as_ref().unwrap().name, "number");
    }

    #[test]
    fn test_no_component_definitions() {
        let error = parse("export const x = 1;", &DocgenConfig::default(), &IgnoreImporter).unwrap_err();
        assert!(matches!(error, DocgenError::NoComponentDefinitions));
    }

    #[test]
    fn test_all_definitions_resolver() {
        let source = "function A() { return <div />; }\nconst B = () => <span />;";
        let exported = parse(source, &DocgenConfig::default(), &IgnoreImporter);
        assert!(matches!(exported, Err(DocgenError::NoComponentDefinitions)));

        let config = DocgenConfig {
            resolver: Resolver::All,
            ..DocgenConfig::default()
        };
        let docs = parse(source, &config, &IgnoreImporter).unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.display_name.clone().unwrap()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_selected_handlers_only() {
        let config = DocgenConfig {
            handlers: vec![HandlerKind::DisplayName],
            ..DocgenConfig::default()
        };
        let source = "/** Ignored. */\nexport function Only() { return <p />; }";
        let docs = parse(source, &config, &IgnoreImporter).unwrap();
        assert_eq!(docs[0].to_object(), json!({"displayName": "Only"}));
    }

    #[test]
    fn test_error_context_names_the_file() {
        let error = parse_with_context("Empty.js", "const x = 1;", &DocgenConfig::default(), &IgnoreImporter)
            .unwrap_err();
        assert!(format!("{error:#}").contains("Empty.js"));
    }
}
