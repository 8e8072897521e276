//! The static removal list.
//!
//! Component identifiers slated for removal from the Installer Components
//! subtree. The list is data, not behavior: the run takes it as input, so a
//! different list (or a test fixture) slots in without touching the flow.

use crate::domain::ComponentKey;

const COMPONENT_IDS: &[&str] = &[
    "013DB16CAB2C22A469A4E685824BA845",
    "040A459FB93A7C345A5D5184F5A9D1FC",
    "050968945C6E5B4B957014B4F24A5C7",
    "051056AFD4A72015983E34927EBEA02",
    "062BA804C42F88D598438AB2F719690",
    "0802B5A6EF0CE8E99A49E55BC047E282",
    "0A16B912A6CF47D509F7E93A4D43714D",
    "0E589F038BF0D1E51AB2388B086ABF8E",
    "11B3E070A192FB152A9C8CFB4EF153BA",
    "1419ECB0BC2FD248A7457C977C98F90",
    "152933CA21098D428E9F73123B23F09",
    "156F0A8CB8EEC35684B1DC5C020A1D1",
    "1732458BD99D2115A824A048DEF376DD",
    "17A291059CAF79159AE0735BA9A2D842",
    "1A03F8A1022DFB85481485BADA9B579B",
    "1A0EC7A5050942359B9583CF444A934AC",
    "1AEAC25945AECA857827C581C1D0935",
    "1CBDA723DDCCA9E408533AF5F4A7DCB",
    "1D87CC923877F9839B4E3BBFAF4019",
    "20A9C3D58595849A9575F9569934638",
    "20C442A7837FC9E5ABAB788CF585CC4A",
    "2187B41EC9DE0AE5A8C30464DBAD20AF",
    "219124F2F4C3D274D865869DADC75F9",
    "22F4C7B38BE9BE853A1F9BCD928E4395",
    "234475628388E125FB44B5DC1B66074",
    "2363D3C7E4D414C4FA11DE567A4E60E7",
    "242DD62E1AC9D5E449051A7C0FC17EA",
    "243A4D7CC7EFEB850A05445B4FE4A344",
    "2562EE168AAFF6C578C19AA8D2E36BC4",
    "285F70666AE86874FACBE45F6A8F48DD",
    "288ACB98ECD43CF549DDBAE5EE42FFB2",
    "28A12CC3FC9599557859285392BEDF4",
    "2A67139774512F4FA43348E4182E079",
    "2A6F6D311D70E96508F4D1EBCC9D2EFD",
    "2AA9F0DF037D9CC4F8692364B446B203",
    "2BD99D7E377BB384EB41398DEC7F2D0",
    "2E59FCDAE6CD2825C8692EE9518007DA",
    "2E75D00B0D6C7C8429C8D29A960C4A05",
    "2FC173EEC6F6C8A49B35788FC6BFB237",
    "3049DF9378489ED599F9BD1DCF98F9A3",
    "324BAE9B472552947B1F33DB1E2EA962",
    "32DBF6AF0575C6D5B8C985A4C5F6C138",
];

#[must_use]
pub fn default_removal_list() -> Vec<ComponentKey> {
    COMPONENT_IDS.iter().copied().map(ComponentKey::from).collect()
}
