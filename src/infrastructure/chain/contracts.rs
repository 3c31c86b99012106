//! ABI bindings of the contracts the registrar talks to

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract Registry {
        function get_n_coins(address pool) external view returns (uint256[2]);

        function get_gauges(address pool) external view returns (address[10] gauges, int128[10] gauge_types);

        function add_pool(
            address pool,
            uint256 n_coins,
            address lp_token,
            bytes32 rate_info,
            uint256 decimals,
            uint256 underlying_decimals,
            bool is_legacy_a,
            bool is_v1,
            string name
        ) external;

        function add_pool_without_underlying(
            address pool,
            uint256 n_coins,
            address lp_token,
            bytes32 rate_info,
            uint256 decimals,
            uint256 use_rates,
            bool is_legacy_a,
            bool is_v1,
            string name
        ) external;

        function add_metapool(
            address pool,
            uint256 n_coins,
            address lp_token,
            uint256 decimals,
            string name
        ) external;

        function set_liquidity_gauges(address pool, address[10] liquidity_gauges) external;
    }
}

sol! {
    #[sol(rpc)]
    contract GaugeController {
        function gauge_types(address addr) external view returns (int128);
    }
}

// Swap methods whose presence decides the registration variant
sol! {
    function exchange_underlying(int128 i, int128 j, uint256 dx, uint256 min_dy) external;
    function initial_A() external view returns (uint256);
}
