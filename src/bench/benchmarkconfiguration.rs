use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::manager::managererror::ManagerError;


/// One entry of the `functions` array, kept as raw JSON. A malformed entry
/// only affects its own call: the runner skips it or counts it as failed.
#[derive(Debug, Clone)]
pub struct BenchmarkCall {
    function: Option<Value>,
    args: Option<Value>
}

impl BenchmarkCall {
    pub fn new(function: Option<String>, args: Vec<Value>) -> BenchmarkCall {
        BenchmarkCall {
            function: function.map(Value::String),
            args: Some(Value::Array(args))
        }
    }

    pub fn from_json(json_value: Value) -> BenchmarkCall {
        match json_value {
            Value::Object(mut map) => BenchmarkCall {
                function: map.remove("function"),
                args: map.remove("args")
            },
            _ => BenchmarkCall { function: None, args: None }
        }
    }

    /// The function name, if present as a non-empty string.
    pub fn function(&self) -> Option<&str> {
        self.function
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Missing or null `args` is an empty list; anything but an array is an
    /// error for this call.
    pub fn args(&self) -> Result<&[Value], ManagerError> {
        match &self.args {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(args)) => Ok(args),
            Some(other) => Err(ManagerError::InvalidArgumentList(other.clone()))
        }
    }
}


#[derive(Deserialize)]
struct BenchmarkConfigurationJsonProp {
    #[serde(default)]
    functions: Option<Vec<Value>>
}

#[derive(Debug, Clone)]
pub struct BenchmarkConfiguration {
    calls: Vec<BenchmarkCall>
}

impl BenchmarkConfiguration {
    pub fn new(calls: Vec<BenchmarkCall>) -> Result<BenchmarkConfiguration, ManagerError> {
        if calls.is_empty() {
            return Err(ManagerError::EmptyFunctionList);
        }
        Ok(BenchmarkConfiguration { calls })
    }

    pub fn calls(&self) -> &[BenchmarkCall] {
        &self.calls
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<BenchmarkConfiguration, ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        let reader = BufReader::new(file);
        let json_prop: BenchmarkConfigurationJsonProp = serde_json::from_reader(reader)?;
        BenchmarkConfiguration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: BenchmarkConfigurationJsonProp) -> Result<BenchmarkConfiguration, ManagerError> {
        let calls = json_prop.functions
            .unwrap_or_default()
            .into_iter()
            .map(BenchmarkCall::from_json)
            .collect();
        BenchmarkConfiguration::new(calls)
    }
}

impl FromStr for BenchmarkConfiguration {
    type Err = ManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json_prop: BenchmarkConfigurationJsonProp = serde_json::from_str(s)?;
        BenchmarkConfiguration::from_json_prop(json_prop)
    }
}


#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_calls() {
        let configuration: BenchmarkConfiguration = r#"{
            "functions": [
                { "function": "factorial", "args": [10] },
                { "function": "x2Integrate", "args": [0, 1, 1000] },
                { "args": [1] },
                { "function": "factorial", "args": null }
            ]
        }"#.parse().unwrap();
        let calls = configuration.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0].function(), Some("factorial"));
        assert_eq!(calls[1].args().unwrap(), &[json!(0), json!(1), json!(1000)]);
        assert_eq!(calls[2].function(), None);
        assert!(calls[3].args().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_entries_still_load() {
        let configuration: BenchmarkConfiguration = r#"{
            "functions": [
                { "function": "factorial", "args": 5 },
                { "function": 7, "args": [3] },
                { "function": "", "args": [3] },
                42,
                { "function": "factorial", "args": [3] }
            ]
        }"#.parse().unwrap();
        let calls = configuration.calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0].function(), Some("factorial"));
        assert!(matches!(calls[0].args(), Err(ManagerError::InvalidArgumentList(_))));
        assert_eq!(calls[1].function(), None);
        assert_eq!(calls[2].function(), None);
        assert_eq!(calls[3].function(), None);
        assert!(calls[3].args().unwrap().is_empty());
        assert_eq!(calls[4].args().unwrap(), &[json!(3)]);
    }

    #[test]
    fn test_empty_function_list() {
        for source in [r#"{ "functions": [] }"#, r#"{}"#, r#"{ "functions": null }"#] {
            let result = source.parse::<BenchmarkConfiguration>();
            assert!(matches!(result, Err(ManagerError::EmptyFunctionList)));
        }
    }

    #[test]
    fn test_malformed_json() {
        let result = r#"{ "functions": {"function": "factorial"} }"#.parse::<BenchmarkConfiguration>();
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        let result = "not json".parse::<BenchmarkConfiguration>();
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = BenchmarkConfiguration::from_reader("/nonexistent/bench_args.json");
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
