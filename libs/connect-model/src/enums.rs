//! String-backed enumerations of the service model.
//!
//! Each enumeration documents a closed set of values, but the model never
//! rejects a value it does not know: unknown text is kept verbatim in the
//! `Unknown` variant so that values added by the service later still round
//! trip. `From<&str>` is the lenient conversion used by record setters;
//! `FromStr` is the strict one and fails with `ModelError::UnknownVariant`.
//!
//! The payload of `Unknown` can only be built by `From`, so a documented
//! literal always maps to its own variant and every wire value has exactly
//! one stored form.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::ModelError;
use crate::value::{string_hash, FieldValue};

/// Text of a value outside the documented set of the enumeration `E`.
pub struct UnknownValue<E> {
    value: String,
    kind: PhantomData<fn() -> E>,
}

impl<E> UnknownValue<E> {
    fn new(value: String) -> Self {
        Self { value, kind: PhantomData }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<E> fmt::Debug for UnknownValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<E> Clone for UnknownValue<E> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<E> PartialEq for UnknownValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E> Eq for UnknownValue<E> {}

impl<E> PartialOrd for UnknownValue<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for UnknownValue<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<E> Hash for UnknownValue<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the documented set, kept verbatim.
            Unknown(UnknownValue<$name>),
        }

        impl $name {
            const VALUES: &'static [&'static str] = &[$($value),+];

            /// The documented wire values, in declaration order.
            pub fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unknown(UnknownValue::new(other.to_owned())),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $value => Self::$variant, )+
                    _ => Self::Unknown(UnknownValue::new(value)),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match Self::from(s) {
                    Self::Unknown(value) => Err(ModelError::UnknownVariant {
                        kind: stringify!($name),
                        value: value.into_string(),
                    }),
                    known => Ok(known),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl FieldValue for $name {
            fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }

            fn value_hash(&self) -> i32 {
                string_hash(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Channel a contact arrives on.
    Channel {
        Voice => "VOICE",
        Chat => "CHAT",
        Task => "TASK",
    }
}

string_enum! {
    /// Which past chat segment a persistent chat is rehydrated from.
    RehydrationType {
        /// Most recently terminated contact of the past chat session.
        EntirePastSession => "ENTIRE_PAST_SESSION",
        /// The contact given in `SourceContactId`.
        FromSegment => "FROM_SEGMENT",
    }
}

string_enum! {
    QueueStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    QueueType {
        Standard => "STANDARD",
        Agent => "AGENT",
    }
}

string_enum! {
    /// Phone type of an agent.
    PhoneType {
        SoftPhone => "SOFT_PHONE",
        DeskPhone => "DESK_PHONE",
    }
}

string_enum! {
    /// Grouping applied to historical metrics.
    Grouping {
        Queue => "QUEUE",
        Channel => "CHANNEL",
        RoutingProfile => "ROUTING_PROFILE",
    }
}

string_enum! {
    /// Historical metrics available through `GetMetricData`.
    HistoricalMetricName {
        ContactsQueued => "CONTACTS_QUEUED",
        ContactsHandled => "CONTACTS_HANDLED",
        ContactsAbandoned => "CONTACTS_ABANDONED",
        ContactsConsulted => "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        ContactsMissed => "CONTACTS_MISSED",
        Occupancy => "OCCUPANCY",
        HandleTime => "HANDLE_TIME",
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        QueuedTime => "QUEUED_TIME",
        AbandonTime => "ABANDON_TIME",
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        HoldTime => "HOLD_TIME",
        InteractionTime => "INTERACTION_TIME",
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        ServiceLevel => "SERVICE_LEVEL",
    }
}

string_enum! {
    /// Real-time metrics available through `GetCurrentMetricData`.
    CurrentMetricName {
        AgentsOnline => "AGENTS_ONLINE",
        AgentsAvailable => "AGENTS_AVAILABLE",
        AgentsOnCall => "AGENTS_ON_CALL",
        AgentsNonProductive => "AGENTS_NON_PRODUCTIVE",
        AgentsAfterContactWork => "AGENTS_AFTER_CONTACT_WORK",
        AgentsError => "AGENTS_ERROR",
        AgentsStaffed => "AGENTS_STAFFED",
        ContactsInQueue => "CONTACTS_IN_QUEUE",
        OldestContactAge => "OLDEST_CONTACT_AGE",
        ContactsScheduled => "CONTACTS_SCHEDULED",
        AgentsOnContact => "AGENTS_ON_CONTACT",
        SlotsActive => "SLOTS_ACTIVE",
        SlotsAvailable => "SLOTS_AVAILABLE",
    }
}

string_enum! {
    Statistic {
        Sum => "SUM",
        Max => "MAX",
        Avg => "AVG",
    }
}

string_enum! {
    Unit {
        Seconds => "SECONDS",
        Count => "COUNT",
        Percent => "PERCENT",
    }
}

string_enum! {
    /// Threshold comparison. Only "less than" is supported by the service.
    Comparison {
        Lt => "LT",
    }
}

string_enum! {
    ContactFlowType {
        ContactFlow => "CONTACT_FLOW",
        CustomerQueue => "CUSTOMER_QUEUE",
        CustomerHold => "CUSTOMER_HOLD",
        CustomerWhisper => "CUSTOMER_WHISPER",
        AgentHold => "AGENT_HOLD",
        AgentWhisper => "AGENT_WHISPER",
        OutboundWhisper => "OUTBOUND_WHISPER",
        AgentTransfer => "AGENT_TRANSFER",
        QueueTransfer => "QUEUE_TRANSFER",
    }
}

string_enum! {
    PhoneNumberType {
        TollFree => "TOLL_FREE",
        Did => "DID",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_conversion_maps_known_values() {
        assert_eq!(Channel::from("VOICE"), Channel::Voice);
        assert_eq!(Channel::from("TASK".to_string()), Channel::Task);
        assert_eq!(RehydrationType::from("FROM_SEGMENT"), RehydrationType::FromSegment);
    }

    #[test]
    fn unknown_values_pass_through() {
        let channel = Channel::from("EMAIL");
        assert!(matches!(&channel, Channel::Unknown(value) if value.as_str() == "EMAIL"));
        assert_eq!(channel, Channel::from("EMAIL".to_string()));
        assert_eq!(channel.as_str(), "EMAIL");
        assert!(!channel.is_known());
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!("CHAT".parse::<Channel>().unwrap(), Channel::Chat);
        let err = "chat".parse::<Channel>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownVariant { kind: "Channel", .. }));
    }

    #[test]
    fn values_round_trip_through_as_str() {
        for value in HistoricalMetricName::values() {
            let parsed: HistoricalMetricName = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
        assert_eq!(HistoricalMetricName::values().len(), 25);
    }

    #[test]
    fn serde_uses_wire_string() {
        let json = serde_json::to_string(&QueueStatus::Enabled).unwrap();
        assert_eq!(json, "\"ENABLED\"");
        let parsed: QueueStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(parsed, QueueStatus::from("PAUSED"));
        assert!(!parsed.is_known());
    }

    #[test]
    fn known_literals_never_become_unknown() {
        for value in Channel::values() {
            assert!(Channel::from(*value).is_known());
            assert!(Channel::from(value.to_string()).is_known());
        }
        let voice = Channel::from(String::from("VOICE"));
        assert_eq!(voice, Channel::Voice);
        assert!(!matches!(voice, Channel::Unknown(_)));
    }

    #[test]
    fn unknown_values_order_and_compare_by_text() {
        assert_eq!(Statistic::from("MEDIAN"), Statistic::from("MEDIAN".to_string()));
        assert_ne!(Statistic::from("MEDIAN"), Statistic::from("P90"));
        assert!(Statistic::from("A") < Statistic::from("B"));
    }

    #[test]
    fn hash_is_that_of_the_wire_string() {
        assert_eq!(Channel::Voice.value_hash(), string_hash("VOICE"));
        assert_eq!(Channel::from("X").value_hash(), string_hash("X"));
    }
}
